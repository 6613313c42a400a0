//! Storage trait for cached definitions.

use async_trait::async_trait;

use crate::error::Result;

/// Point-lookup, insert-only key/value store for definition JSON.
///
/// Implementations enforce key uniqueness: inserting an existing key fails
/// instead of overwriting. Callers decide whether that failure matters.
#[async_trait]
pub trait DefinitionStore: Send + Sync {
    /// Stored definition for `word_key`, or `None` when absent.
    async fn get(&self, word_key: &str) -> Result<Option<String>>;

    /// Insert a new definition. Fails if `word_key` already exists.
    async fn insert(&self, word_key: &str, definition: &str) -> Result<()>;

    /// Number of cached definitions.
    async fn count(&self) -> Result<u64>;

    /// Backend name, for logs and health output.
    fn name(&self) -> &str;
}
