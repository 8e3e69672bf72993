//! Category tabs: the seed ordering, pure reordering, and persistence.
//!
//! Two disjoint ordered sequences exist at all times: the visible menu tabs and
//! the overflow ("other") tabs. Moving a tab removes it from one sequence and
//! inserts it into the other, so every seeded category value lives in exactly
//! one of them.

mod defaults;
mod persist;
mod reorder;

use serde::{Deserialize, Serialize};

pub use defaults::{default_menu_tabs, default_other_menu_tabs, DEFAULT_CATEGORY};
pub use persist::{load_tabs, save_tabs};
pub use reorder::{mark_active, move_tab, Placement, TabMove};

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Display label.
    pub text: String,
    /// Category key sent to the news API.
    pub value: String,
    /// Whether this is the currently selected category.
    #[serde(default)]
    pub active: bool,
}

impl Tab {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            active: false,
        }
    }
}
