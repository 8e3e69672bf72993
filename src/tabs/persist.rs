use super::Tab;
use crate::storage::TabStorage;

/// Read a tab sequence from storage, falling back to `fallback()`.
///
/// A missing key, an unreadable payload and a storage failure are all
/// treated as a cache miss; none of them is reported to the caller.
pub async fn load_tabs<S: TabStorage>(storage: &S, key: &str, fallback: fn() -> Vec<Tab>) -> Vec<Tab> {
    let raw = match storage.read(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = %key, "No persisted tabs, using defaults");
            return fallback();
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read persisted tabs, using defaults");
            return fallback();
        }
    };

    match serde_json::from_str::<Vec<Tab>>(&raw) {
        Ok(tabs) => {
            tracing::debug!(key = %key, count = tabs.len(), "Restored persisted tabs");
            tabs
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Persisted tabs are malformed, using defaults");
            fallback()
        }
    }
}

/// Write a tab sequence to storage as JSON.
///
/// Fire-and-forget: failures are logged and swallowed.
pub async fn save_tabs<S: TabStorage>(storage: &S, key: &str, tabs: &[Tab]) {
    let payload = match serde_json::to_string(tabs) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to serialize tabs");
            return;
        }
    };

    if let Err(e) = storage.write(key, &payload).await {
        tracing::warn!(key = %key, error = %e, "Failed to persist tabs");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};
    use crate::tabs::{default_menu_tabs, default_other_menu_tabs};
    use pretty_assertions::assert_eq;

    const KEY: &str = "menuTabsLocalDataKey";

    /// Storage whose every call fails.
    struct BrokenStorage;

    impl TabStorage for BrokenStorage {
        async fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        async fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }
    }

    #[tokio::test]
    async fn test_absent_key_uses_fallback() {
        let storage = MemoryStorage::new();
        let tabs = load_tabs(&storage, KEY, default_menu_tabs).await;
        assert_eq!(tabs, default_menu_tabs());
    }

    #[tokio::test]
    async fn test_invalid_json_uses_fallback() {
        let storage = MemoryStorage::seeded([(KEY, "{not json")]);
        let tabs = load_tabs(&storage, KEY, default_other_menu_tabs).await;
        assert_eq!(tabs, default_other_menu_tabs());
    }

    #[tokio::test]
    async fn test_null_payload_uses_fallback() {
        let storage = MemoryStorage::seeded([(KEY, "null")]);
        let tabs = load_tabs(&storage, KEY, default_menu_tabs).await;
        assert_eq!(tabs, default_menu_tabs());
    }

    #[tokio::test]
    async fn test_read_error_uses_fallback() {
        let tabs = load_tabs(&BrokenStorage, KEY, default_menu_tabs).await;
        assert_eq!(tabs, default_menu_tabs());
    }

    #[tokio::test]
    async fn test_empty_array_is_respected() {
        let storage = MemoryStorage::seeded([(KEY, "[]")]);
        let tabs = load_tabs(&storage, KEY, default_menu_tabs).await;
        assert!(tabs.is_empty());
    }

    #[tokio::test]
    async fn test_payload_without_active_flag() {
        let storage = MemoryStorage::seeded([(KEY, r#"[{"text":"科技","value":"keji"}]"#)]);
        let tabs = load_tabs(&storage, KEY, default_menu_tabs).await;
        assert_eq!(tabs, vec![Tab::new("科技", "keji")]);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let mut tabs = default_other_menu_tabs();
        tabs.reverse();

        save_tabs(&storage, KEY, &tabs).await;
        let restored = load_tabs(&storage, KEY, default_other_menu_tabs).await;

        assert_eq!(restored, tabs);
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        save_tabs(&BrokenStorage, KEY, &default_menu_tabs()).await;
    }
}
