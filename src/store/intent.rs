use crate::api::ListParams;
use crate::feed::FeedEntry;
use crate::tabs::Tab;

/// User-facing actions accepted by [`FeedStore::dispatch`](super::FeedStore::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Select `params.category` and fetch a page of its news.
    GetNewsList(ListParams),
    /// Look up an already loaded entry by id.
    GetNewsDetail { nid: String },
    /// Open the image preview on an entry's images.
    ShowPreview(FeedEntry),
    ClosePreview,
    /// Move a tab from the overflow set to the end of the menu.
    AddCategory { value: String },
    /// Move a menu tab to the front of the overflow set.
    DelCategory(Tab),
}
