//! SQLite-backed definition store.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use super::store::DefinitionStore;
use crate::error::Result;

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS cache (
    "word_key" TEXT NOT NULL PRIMARY KEY,
    "definition" TEXT,
    "created_at" DATETIME DEFAULT CURRENT_TIMESTAMP
)"#;

const MAX_CONNECTIONS: u32 = 5;

/// Definition store on a single SQLite table.
///
/// The pool serializes access per connection; no extra locking is added on
/// top. Concurrent inserts of the same key lose on the primary key.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database file and ensure the table exists.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        let store = Self::with_pool(pool).await?;
        info!(path = %path.display(), "Definition cache opened");
        Ok(store)
    }

    /// Private in-memory database, mostly for tests.
    ///
    /// Every SQLite connection to `:memory:` is a separate database, so the
    /// pool is pinned to one connection that is never recycled.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the table if absent.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_TABLE_SQL).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl DefinitionStore for SqliteStore {
    async fn get(&self, word_key: &str) -> Result<Option<String>> {
        let row = sqlx::query_scalar::<_, Option<String>>(
            "SELECT definition FROM cache WHERE word_key = ?",
        )
        .bind(word_key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.flatten())
    }

    async fn insert(&self, word_key: &str, definition: &str) -> Result<()> {
        sqlx::query("INSERT INTO cache (word_key, definition) VALUES (?, ?)")
            .bind(word_key)
            .bind(definition)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cache")
            .fetch_one(&self.pool)
            .await?;
        Ok(n.max(0) as u64)
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictError;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        assert!(store.get("en-zh:cat").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        store
            .insert("en-zh:cat", r#"{"p":"cat","defs":[]}"#)
            .await
            .unwrap();
        assert_eq!(
            store.get("en-zh:cat").await.unwrap().as_deref(),
            Some(r#"{"p":"cat","defs":[]}"#)
        );
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails_and_keeps_first() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        store.insert("en-zh:cat", "first").await.unwrap();
        let err = store.insert("en-zh:cat", "second").await.unwrap_err();
        assert!(matches!(err, DictError::Store(_)));
        assert_eq!(
            store.get("en-zh:cat").await.unwrap().as_deref(),
            Some("first")
        );
    }

    #[tokio::test]
    async fn test_keys_are_exact_match() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        store.insert("en-zh:cat", "x").await.unwrap();
        assert!(store.get("en-zh:Cat").await.unwrap().is_none());
        assert!(store.get("EN-zh:cat").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_persists_across_reopen() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("dictionary.db");
        {
            let store = SqliteStore::open(&path).await.unwrap();
            store.insert("en-fr:run", r#"{"p":"run"}"#).await.unwrap();
            store.pool.close().await;
        }
        let reopened = SqliteStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("en-fr:run").await.unwrap().as_deref(),
            Some(r#"{"p":"run"}"#)
        );
        assert_eq!(reopened.name(), "sqlite");
    }
}
