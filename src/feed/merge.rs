use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::entry::FeedEntry;
use super::time::display_time;

// ============================================================================
// Load Status
// ============================================================================

/// Loading state of the news list.
///
/// Serialized the way the view layer expects it: `false` before the first
/// successful merge, then `"loaded"` or `"complete"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing merged yet.
    #[default]
    Idle,
    /// The last merge produced at least one news entry.
    Loaded,
    /// The last merge produced no news entries (end of feed).
    Complete,
}

impl Serialize for LoadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LoadStatus::Idle => serializer.serialize_bool(false),
            LoadStatus::Loaded => serializer.serialize_str("loaded"),
            LoadStatus::Complete => serializer.serialize_str("complete"),
        }
    }
}

// ============================================================================
// Ingestion and Merge
// ============================================================================

/// Drop entries without content and stamp `show` on the rest.
///
/// `now` is the fallback display time for entries with no usable `ts`; the
/// caller captures it once per batch so every entry in a batch agrees.
pub fn ingest(entries: Vec<FeedEntry>, now: DateTime<Utc>) -> Vec<FeedEntry> {
    entries
        .into_iter()
        .filter(FeedEntry::has_content)
        .map(|mut entry| {
            entry.show = Some(display_time(entry.ts.as_ref(), now));
            entry
        })
        .collect()
}

/// Combine an ingested news batch with the current list.
///
/// - empty batch → list untouched, `Complete`
/// - `change` → batch replaces the list, `Loaded`
/// - otherwise → batch appended, `Loaded`
pub fn merge_news(
    mut existing: Vec<FeedEntry>,
    batch: Vec<FeedEntry>,
    change: bool,
) -> (Vec<FeedEntry>, LoadStatus) {
    if batch.is_empty() {
        return (existing, LoadStatus::Complete);
    }
    if change {
        (batch, LoadStatus::Loaded)
    } else {
        existing.extend(batch);
        (existing, LoadStatus::Loaded)
    }
}
