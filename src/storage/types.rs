use std::future::Future;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Database-specific errors with user-friendly messages
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Another process holds a lock on the database file
    #[error("The preferences database is locked by another process. Please close it and try again.")]
    InstanceLocked,

    /// Migration failed
    #[error("Database migration failed: {0}")]
    Migration(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Other(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Check if a sqlx error indicates database locking
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        if is_lock_message(&err.to_string()) {
            return DatabaseError::InstanceLocked;
        }
        DatabaseError::Other(err)
    }
}

/// SQLITE_BUSY (5), SQLITE_LOCKED (6) and SQLITE_CANTOPEN (14) all surface as
/// one of these messages.
pub(crate) fn is_lock_message(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("database is locked")
        || message.contains("database table is locked")
        || message.contains("sqlite_busy")
        || message.contains("sqlite_locked")
        || message.contains("unable to open database file")
}

/// Errors from a key/value backend used to persist tab sequences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Key/Value Storage
// ============================================================================

/// Persistent string key/value store holding the serialized tab sequences.
///
/// Reads return `Ok(None)` for a key that was never written. Callers treat
/// every failure as a cache miss, so implementations should not retry.
pub trait TabStorage {
    /// Read the raw value stored under `key`.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}
