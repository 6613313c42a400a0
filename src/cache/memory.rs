//! In-memory definition store with the same insert-once semantics as SQLite.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::DefinitionStore;
use crate::error::{DictError, Result};

/// Process-local definition store. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DefinitionStore for MemoryStore {
    async fn get(&self, word_key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(word_key).cloned())
    }

    async fn insert(&self, word_key: &str, definition: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(word_key) {
            return Err(DictError::Store(format!(
                "duplicate word key: {}",
                word_key
            )));
        }
        entries.insert(word_key.to_string(), definition.to_string());
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.entries.read().await.len() as u64)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
