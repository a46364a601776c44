//! Key-value repository over the `kv_store` table.
//!
//! Every write bumps the revision counter in the same transaction.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Revision information for change detection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}

/// Durable string store keyed by record name.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("revision_id"))
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }

    /// Read the raw value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get("value")))
    }

    /// Replace the value stored under `key` and return the new revision ID.
    pub async fn put(&self, key: &str, value: &str) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
               ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
            .bind(&now)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.get("revision_id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repository() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("kv.sqlite"))
            .await
            .expect("Failed to init DB");
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (repo, _dir) = repository().await;
        assert_eq!(repo.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_and_bumps_revision() {
        let (repo, _dir) = repository().await;
        let start = repo.get_revision_id().await.unwrap();

        let first = repo.put("record", "{\"a\":1}").await.unwrap();
        let second = repo.put("record", "{\"a\":2}").await.unwrap();

        assert_eq!(first, start + 1);
        assert_eq!(second, start + 2);
        assert_eq!(repo.get("record").await.unwrap().as_deref(), Some("{\"a\":2}"));
        assert_eq!(repo.get_revision_info().await.unwrap().revision_id, second);
    }
}
