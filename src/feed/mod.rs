//! Feed entries and the list-merge logic for incrementally loaded feeds.
//!
//! - [`entry`] - The `FeedEntry` payload type shared by news, topic and banner lists
//! - [`time`] - Derivation of the `show` display timestamp from a raw `ts`
//! - [`merge`] - Filtering, enrichment and replace/append of news batches
//!
//! # Example
//!
//! ```ignore
//! use feedstate::feed::{ingest, merge_news};
//!
//! let fresh = ingest(batch, chrono::Utc::now());
//! let (news_list, loaded) = merge_news(existing, fresh, change);
//! ```

mod entry;
mod merge;
mod time;

pub use entry::{FeedEntry, ImageUrl};
pub use merge::{ingest, merge_news, LoadStatus};
pub use time::{display_time, timestamp_millis, SHOW_FORMAT};
pub(crate) use entry::{lenient_entries, lenient_optional_entries};
