//! Integration tests for category tab persistence across store sessions.
//!
//! Each test opens a file-backed SQLite database in its own temp directory,
//! customizes tabs through one store, drops it, and reopens a fresh store on
//! the same file to check what survived.

use std::path::PathBuf;

use feedstate::{
    Database, FeedStore, MemoryStorage, PersistPolicy, ScriptedApi, StoreConfig, Tab, TabStorage,
};
use pretty_assertions::assert_eq;

struct TempDb {
    dir: PathBuf,
}

impl TempDb {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("feedstate_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    fn path(&self) -> String {
        self.dir.join("prefs.db").to_string_lossy().into_owned()
    }

    async fn open(&self) -> Database {
        Database::open(&self.path()).await.unwrap()
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

fn values(tabs: &[Tab]) -> Vec<&str> {
    tabs.iter().map(|t| t.value.as_str()).collect()
}

async fn open_store<S: TabStorage>(storage: S) -> FeedStore<ScriptedApi, S> {
    FeedStore::new(ScriptedApi::new(), storage, StoreConfig::default()).await
}

// ============================================================================
// Round trips through SQLite
// ============================================================================

#[tokio::test]
async fn test_reordered_tabs_survive_reopen() {
    let tmp = TempDb::new("reopen");

    {
        let mut store = open_store(tmp.open().await).await;
        store.del_category(&Tab::new("军事", "junshi")).await;
        store.del_category(&Tab::new("美女", "meinv")).await;
        store.add_category("keji").await;
    }

    let store = open_store(tmp.open().await).await;
    assert_eq!(
        values(store.menu_tabs()),
        vec!["remen", "yule", "tiyu", "shehui", "qiche", "guonei", "guoji", "keji"]
    );
    assert_eq!(
        values(store.other_menu_tabs()),
        vec!["meinv", "junshi", "shipin", "caijing", "dongman"]
    );
    // The default category is re-selected on every start.
    assert!(store.menu_tabs()[0].active);
}

#[tokio::test]
async fn test_fresh_database_uses_defaults_without_writing() {
    let tmp = TempDb::new("fresh");
    let store = open_store(tmp.open().await).await;

    assert_eq!(store.menu_tabs().len(), 9);
    assert_eq!(store.other_menu_tabs().len(), 4);
    let db = store.storage();
    assert_eq!(db.get_preference("menuTabsLocalDataKey").await.unwrap(), None);
    assert_eq!(db.get_preference("otherMenuTabsLocalDataKey").await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_row_falls_back_to_defaults() {
    let tmp = TempDb::new("corrupt");
    {
        let db = tmp.open().await;
        db.set_preference("menuTabsLocalDataKey", "[{\"text\": 1").await.unwrap();
        db.set_preference("otherMenuTabsLocalDataKey", "[]").await.unwrap();
    }

    let store = open_store(tmp.open().await).await;
    assert_eq!(values(store.menu_tabs())[0], "remen");
    assert_eq!(store.menu_tabs().len(), 9);
    assert!(store.other_menu_tabs().is_empty());
}

#[tokio::test]
async fn test_unmatched_add_rewrites_only_overflow() {
    let tmp = TempDb::new("unmatched_add");
    let db = tmp.open().await;
    db.set_preference("menuTabsLocalDataKey", "[{\"text\":\"热点\",\"value\":\"remen\"}]")
        .await
        .unwrap();

    let mut store = open_store(db).await;
    store.add_category("not-a-category").await;

    let db = store.storage();
    assert_eq!(
        db.get_preference("menuTabsLocalDataKey").await.unwrap().as_deref(),
        Some("[{\"text\":\"热点\",\"value\":\"remen\"}]")
    );
    assert!(db
        .get_preference("otherMenuTabsLocalDataKey")
        .await
        .unwrap()
        .is_some());
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_custom_keys_and_always_policy() {
    let storage = MemoryStorage::new();
    let config = StoreConfig {
        menu_tabs_key: "tabs.menu".to_string(),
        other_menu_tabs_key: "tabs.other".to_string(),
        persist_policy: PersistPolicy::Always,
        ..StoreConfig::default()
    };
    let mut store = FeedStore::new(ScriptedApi::new(), storage.clone(), config).await;

    store.del_category(&Tab::new("无", "missing")).await;

    assert_eq!(storage.write_log().await, vec!["tabs.other", "tabs.menu"]);
    assert!(storage.get("menuTabsLocalDataKey").await.is_none());
}

#[tokio::test]
async fn test_persisted_json_shape() {
    let storage = MemoryStorage::new();
    let mut store = open_store(storage.clone()).await;

    store.del_category(&Tab::new("热点", "remen")).await;

    let raw = storage.get("otherMenuTabsLocalDataKey").await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["text"], "热点");
    assert_eq!(json[0]["value"], "remen");
    assert_eq!(json[0]["active"], true);
}
