use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::types::{StorageError, TabStorage};

/// In-process key/value store.
///
/// Clones share the same map, so a test can keep a handle and inspect what a
/// store persisted. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`, e.g. to simulate a previous session.
    pub fn seeded<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
            writes: Arc::default(),
        }
    }

    /// Current value for `key`.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    /// Keys in the order they were written, one element per write.
    pub async fn write_log(&self) -> Vec<String> {
        self.writes.lock().await.clone()
    }
}

impl TabStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.lock().await.push(key.to_string());
        Ok(())
    }
}
