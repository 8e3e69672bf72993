use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Feed Entry
// ============================================================================

/// A single news, topic or banner item as delivered by the news API.
///
/// Only the fields the store reasons about are typed. Everything else in the
/// payload (title, site, url, ...) is kept in `extra` and serialized back
/// unchanged so the view layer sees the full item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Unique item identifier. Numeric ids are normalized to their decimal string.
    #[serde(deserialize_with = "string_or_number")]
    pub nid: String,

    /// Content blocks. Entries with no content are dropped at ingestion.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<Value>,

    /// Raw publish timestamp in epoch milliseconds (number or numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<Value>,

    /// Display timestamp (`YYYY-MM-DD HH:MM`, UTC), set at ingestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<String>,

    /// Images attached to the item, shown by the preview overlay.
    #[serde(default, deserialize_with = "null_as_default")]
    pub imageurls: Vec<ImageUrl>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Image reference inside a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl FeedEntry {
    /// Minimal entry with a single text block, mostly useful for tests and fixtures.
    pub fn new(nid: impl Into<String>) -> Self {
        Self {
            nid: nid.into(),
            content: vec![Value::String(String::new())],
            ts: None,
            show: None,
            imageurls: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Whether this entry carries any content and may enter a list.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Uint(n) => n.to_string(),
    })
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a list of entries one item at a time.
///
/// Items that do not decode as a [`FeedEntry`] are logged and skipped so the
/// rest of the batch survives. `null` or a missing list yields an empty one.
pub(crate) fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<FeedEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = null_as_default(deserializer)?;
    Ok(decode_entries(raw))
}

/// Like [`lenient_entries`] but keeps an absent or `null` list as `None`.
pub(crate) fn lenient_optional_entries<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<FeedEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(decode_entries))
}

fn decode_entries(raw: Vec<Value>) -> Vec<FeedEntry> {
    let total = raw.len();
    let entries: Vec<FeedEntry> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<FeedEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed feed entry");
                None
            }
        })
        .collect();

    if entries.len() < total {
        tracing::debug!(kept = entries.len(), total, "Dropped malformed entries from batch");
    }
    entries
}
