//! Cache-first definition lookup.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::extract::extract_json;
use crate::cache::{normalize_word, word_key, DefinitionStore};
use crate::error::{DictError, Result};
use crate::prompts::{self, PromptRegistry};
use crate::providers::CompletionClient;

/// Resolves words to definition JSON, generating and caching on a miss.
///
/// All dependencies are injected and shared immutably. There is no per-key
/// coordination: two concurrent misses for one word both call the API and
/// the second insert loses on the store's primary key, which is ignored.
pub struct LookupEngine {
    store: Arc<dyn DefinitionStore>,
    prompts: Arc<PromptRegistry>,
    client: Arc<dyn CompletionClient>,
}

impl LookupEngine {
    pub fn new(
        store: Arc<dyn DefinitionStore>,
        prompts: Arc<PromptRegistry>,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            store,
            prompts,
            client,
        }
    }

    pub fn prompts(&self) -> &PromptRegistry {
        &self.prompts
    }

    pub fn store(&self) -> &dyn DefinitionStore {
        self.store.as_ref()
    }

    /// Definition JSON for `word` translated from `source` to `target`.
    ///
    /// Cached text is returned verbatim. On a miss the model output is run
    /// through [`extract_json`] and stored; a failed store write is logged
    /// and the fresh result is still returned.
    pub async fn get_definition(&self, word: &str, source: &str, target: &str) -> Result<Vec<u8>> {
        let normalized = normalize_word(word);
        let key = word_key(source, target, &normalized);

        match self.store.get(&key).await {
            Ok(Some(cached)) => {
                info!(key = %key, original = %word, "Cache hit");
                return Ok(cached.into_bytes());
            }
            Ok(None) => {}
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed; treating as miss");
            }
        }

        info!(key = %key, "Cache miss, calling completion API");

        let pair = prompts::pair_key(source, target);
        let template = self
            .prompts
            .get(&pair)
            .ok_or_else(|| DictError::UnsupportedLanguagePair(pair.clone()))?;
        let prompt = prompts::render(template, &normalized);

        let content = self.client.complete(&prompt).await?;
        let definition = extract_json(&content);
        debug!(key = %key, bytes = definition.len(), "Extracted definition");

        if let Err(e) = self.store.insert(&key, definition).await {
            warn!(key = %key, error = %e, "Failed to insert into cache");
        }

        Ok(definition.as_bytes().to_vec())
    }
}
