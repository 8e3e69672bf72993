use chrono::{DateTime, Utc};

use super::state::{FeedState, PreviewPatch};
use crate::feed::FeedEntry;

/// Synchronous state transitions. Applied by [`reduce`](super::reduce).
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Merge a fetched batch into the lists.
    SetNewsList {
        news: Vec<FeedEntry>,
        topic: Option<Vec<FeedEntry>>,
        banner: Vec<FeedEntry>,
        change: bool,
        /// Fallback display time for entries without a usable `ts`.
        received_at: DateTime<Utc>,
    },
    SetNewsDetail(Option<FeedEntry>),
    /// Mark a category as the selected one.
    SetNewsActiveTab(String),
    SetPreviewData(PreviewPatch),
    /// Move the menu tab with this value to the overflow set.
    DelCategory(String),
    /// Move the overflow tab with this value to the menu.
    AddCategory(String),
}

/// Which persisted tab sequence an effect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSet {
    Menu,
    Other,
}

/// Side effects requested by a transition, run by the store after the state
/// has been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the current contents of a tab sequence to storage.
    PersistTabs(TabSet),
}

/// Output of [`reduce`](super::reduce).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: FeedState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn pure(state: FeedState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}
