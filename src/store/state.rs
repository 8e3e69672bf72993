use serde::{Deserialize, Serialize};

use crate::feed::{FeedEntry, LoadStatus};
use crate::tabs::Tab;

/// Root state owned by a [`FeedStore`](super::FeedStore).
///
/// Serializes with the camelCase field names the view layer binds to.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedState {
    pub loaded: LoadStatus,
    pub news_list: Vec<FeedEntry>,
    pub topic_list: Vec<FeedEntry>,
    pub banner_list: Vec<FeedEntry>,
    pub news_detail: Option<FeedEntry>,
    /// Currently selected category key.
    pub category: String,
    /// Length of `news_list` before the most recent merge.
    pub last_list_len: usize,
    pub menu_tabs: Vec<Tab>,
    pub other_menu_tabs: Vec<Tab>,
    pub preview: PreviewState,
}

/// Image preview overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewState {
    pub show: bool,
    pub images: Vec<PreviewImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub src: String,
}

/// Partial update of [`PreviewState`]; unset fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewPatch {
    pub show: Option<bool>,
    pub images: Option<Vec<PreviewImage>>,
}

impl PreviewState {
    pub fn apply(self, patch: PreviewPatch) -> Self {
        Self {
            show: patch.show.unwrap_or(self.show),
            images: patch.images.unwrap_or(self.images),
        }
    }
}

impl PreviewPatch {
    /// Open the overlay on the images of `entry`.
    pub fn open(entry: &FeedEntry) -> Self {
        let images = entry
            .imageurls
            .iter()
            .map(|image| PreviewImage {
                src: image.url.clone(),
            })
            .collect();
        Self {
            show: Some(true),
            images: Some(images),
        }
    }

    /// Hide the overlay, keeping its images.
    pub fn close() -> Self {
        Self {
            show: Some(false),
            images: None,
        }
    }
}
