//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the filter comes from
//! [`Config::log_level`](crate::config::Config::log_level).

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Build the filter: `RUST_LOG` if present and valid, else `fallback`, else `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global fmt subscriber writing to stderr.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is left alone.
pub fn init(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
