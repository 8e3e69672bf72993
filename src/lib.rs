//! Client-side state container for a news reader.
//!
//! [`FeedStore`] holds the fetched news, topic and banner lists, the
//! category tabs, the detail lookup and the image preview overlay. News comes
//! from a [`NewsApi`]; tab customizations are written through to a
//! [`TabStorage`].
//!
//! ```no_run
//! use feedstate::{Config, Database, FeedStore, HttpNewsApi, ListParams};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! feedstate::logging::init(&config);
//!
//! let api = HttpNewsApi::from_config(&config)?;
//! let db = Database::open("feedstate.db").await?;
//! let mut store = FeedStore::new(api, db, config.store_config()).await;
//!
//! store.get_news_list(ListParams::refresh("remen")).await;
//! for entry in store.news_list() {
//!     println!("{} {}", entry.show.as_deref().unwrap_or(""), entry.nid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod feed;
pub mod logging;
pub mod storage;
pub mod store;
pub mod tabs;

pub use api::{ApiError, FeedPayload, HttpNewsApi, ListParams, NewsApi, ScriptedApi};
pub use config::{Config, ConfigError, PersistPolicy, StoreConfig};
pub use feed::{FeedEntry, ImageUrl, LoadStatus};
pub use storage::{Database, DatabaseError, MemoryStorage, StorageError, TabStorage};
pub use store::{FeedState, FeedStore, Intent, ListOutcome, PreviewState};
pub use tabs::Tab;
