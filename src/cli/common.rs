//! Shared startup helpers for the CLI commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use aidict::cache::{DefinitionStore, MemoryStore, SqliteStore};
use aidict::providers::ChatCompletionsClient;
use aidict::{Config, LookupEngine, PromptRegistry};

/// Load and validate the config for commands that call the completion API.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    Config::load_from_path(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Load the config without requiring API credentials. A missing file
/// falls back to the defaults.
pub(crate) fn load_config_offline(path: &Path) -> Result<Config> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };
    let mut config = Config::from_yaml(&raw)?;
    config.apply_env_overrides();
    Ok(config)
}

pub(crate) fn load_prompts(config: &Config) -> Result<PromptRegistry> {
    let dir = &config.prompts.dir;
    let prompts = PromptRegistry::load_dir(dir)
        .with_context(|| format!("Failed to read prompts directory {}", dir.display()))?;
    info!(dir = %dir.display(), pairs = prompts.len(), "Loaded prompt templates");
    Ok(prompts)
}

/// Wire prompts, cache, and completion client into a lookup engine.
pub(crate) async fn build_engine(config: &Config, persist: bool) -> Result<LookupEngine> {
    let prompts = Arc::new(load_prompts(config)?);

    let store: Arc<dyn DefinitionStore> = if persist {
        let path = &config.storage.database;
        let store = SqliteStore::open(path)
            .await
            .with_context(|| format!("Failed to open cache database {}", path.display()))?;
        Arc::new(store)
    } else {
        Arc::new(MemoryStore::new())
    };

    let client = ChatCompletionsClient::from_config(&config.api)?;
    info!(model = client.model(), "Completion client ready");

    Ok(LookupEngine::new(store, prompts, Arc::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_offline_missing_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_offline(&tmp.path().join("absent.yaml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_config_offline_skips_key_check() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "prompts:\n  dir: ./my-prompts\n").unwrap();
        let config = load_config_offline(&path).unwrap();
        assert_eq!(config.prompts.dir, std::path::PathBuf::from("./my-prompts"));
    }

    #[tokio::test]
    async fn test_build_engine_in_memory() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("en-zh.txt"), "Define ${word}").unwrap();
        let mut config = Config::default();
        config.api.key = "sk-test".into();
        config.prompts.dir = tmp.path().to_path_buf();

        let engine = build_engine(&config, false).await.unwrap();
        assert_eq!(engine.prompts().len(), 1);
        assert_eq!(engine.store().name(), "memory");
    }
}
