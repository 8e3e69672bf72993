use anyhow::Result;

use super::schema::Database;
use super::types::{StorageError, TabStorage};

impl Database {
    // ========================================================================
    // User Preferences Operations
    // ========================================================================

    /// Get a single preference value by key.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if the key was never set.
    pub async fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.fetch_value(key).await?)
    }

    /// Set a preference value (UPSERT).
    ///
    /// Inserts the pair if the key doesn't exist, otherwise replaces the value
    /// and bumps `updated_at`.
    pub async fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.store_value(key, value).await?)
    }

    async fn fetch_value(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM user_preferences WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn store_value(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO user_preferences (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl TabStorage for Database {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.fetch_value(key).await?)
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store_value(key, value).await?;
        tracing::debug!(key = %key, bytes = value.len(), "Persisted preference");
        Ok(())
    }
}
