//! Configuration file parser for the feed store.
//!
//! The config file is optional. A missing file yields `Config::default()`.
//! Unknown keys are ignored by serde (`deny_unknown_fields` off), though we
//! log a warning for each one since they are usually typos.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::tabs::DEFAULT_CATEGORY;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Which tab sequences a category move writes back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistPolicy {
    /// Moving to overflow always writes the menu tabs and writes the overflow
    /// tabs only when a tab moved; moving to the menu is the mirror image.
    #[default]
    Observed,
    /// Every move writes both sequences, matched or not.
    Always,
}

/// Top-level configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category selected at startup.
    pub default_category: String,

    /// Storage key of the visible tab sequence.
    pub menu_tabs_key: String,

    /// Storage key of the overflow tab sequence.
    pub other_menu_tabs_key: String,

    /// Persistence behaviour of category moves.
    pub persist_policy: PersistPolicy,

    /// Base URL of the news API (HTTPS, or http://localhost for testing).
    pub api_base_url: String,

    /// Per-request timeout of the HTTP news client, in seconds.
    pub request_timeout_secs: u64,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "feedstate=debug").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            menu_tabs_key: "menuTabsLocalDataKey".to_string(),
            other_menu_tabs_key: "otherMenuTabsLocalDataKey".to_string(),
            persist_policy: PersistPolicy::default(),
            api_base_url: "https://api.newsfeed.example".to_string(),
            request_timeout_secs: 15,
            log_level: "info".to_string(),
        }
    }
}

/// The subset of [`Config`] the feed store itself needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub default_category: String,
    pub menu_tabs_key: String,
    pub other_menu_tabs_key: String,
    pub persist_policy: PersistPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Config::default().store_config()
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 7] = [
        "default_category",
        "menu_tabs_key",
        "other_menu_tabs_key",
        "persist_policy",
        "api_base_url",
        "request_timeout_secs",
        "log_level",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check size before reading so a huge or corrupted file can't exhaust memory
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(
            default_category = %config.default_category,
            persist_policy = ?config.persist_policy,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Settings handed to [`FeedStore::new`](crate::store::FeedStore::new).
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            default_category: self.default_category.clone(),
            menu_tabs_key: self.menu_tabs_key.clone(),
            other_menu_tabs_key: self.other_menu_tabs_key.clone(),
            persist_policy: self.persist_policy,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
