//! Service configuration loaded from `config.yaml`.
//!
//! Every section is `#[serde(default)]`, so a partial file only overrides
//! what it names. Environment variables (`AIDICT_API_KEY`, `AIDICT_API_URL`,
//! `AIDICT_MODEL`) take precedence over the file, and `.env` files are
//! honoured by the binary before loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DictError, Result};

/// Default config file name, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Character limit used when `validation.max_input_chars` is absent or not positive.
pub const DEFAULT_MAX_INPUT_CHARS: i64 = 50;

/// Key value shipped in the sample config; treated the same as no key.
const PLACEHOLDER_API_KEY: &str = "sk-or-your-key-here";

const ENV_API_KEY: &str = "AIDICT_API_KEY";
const ENV_API_URL: &str = "AIDICT_API_URL";
const ENV_MODEL: &str = "AIDICT_MODEL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub validation: ValidationConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub prompts: PromptsConfig,
}

/// Completion API endpoint and credentials.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Full chat-completions URL (not a base URL to append paths to).
    pub url: String,
    /// Bearer token.
    pub key: String,
    /// Model identifier sent in every request.
    pub model: String,
    /// Optional request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("key", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            key: String::new(),
            model: String::new(),
            timeout_secs: None,
        }
    }
}

/// Input validation limits applied by the HTTP and CLI front ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum word length in characters (not bytes).
    pub max_input_chars: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl ValidationConfig {
    /// Effective limit; non-positive values fall back to the default.
    pub fn max_chars(&self) -> usize {
        if self.max_input_chars > 0 {
            self.max_input_chars as usize
        } else {
            DEFAULT_MAX_INPUT_CHARS as usize
        }
    }

    /// Reject words longer than [`Self::max_chars`] characters.
    pub fn check_word(&self, word: &str) -> Result<()> {
        check_word_length(word, self.max_chars())
    }
}

/// Reject `word` when it has more than `max` characters.
pub fn check_word_length(word: &str, max: usize) -> Result<()> {
    if word.chars().count() > max {
        return Err(DictError::InputTooLong { max });
    }
    Ok(())
}

/// HTTP listener and front-end assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Directory served for any path not matched by an API route.
    pub static_dir: Option<PathBuf>,
    /// GoldenDict HTML template. The embedded default is used when unset.
    pub template: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: Some(PathBuf::from("./static")),
            template: None,
        }
    }
}

impl ServerConfig {
    /// `bind:port` listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Definition cache location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file, created if missing.
    pub database: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("./dictionary.db"),
        }
    }
}

/// Prompt template directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory of `{source}-{target}.txt` templates.
    pub dir: PathBuf,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./prompts"),
        }
    }
}

impl Config {
    /// Read, override from the environment, and validate a config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DictError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_yaml(&raw)?;
        config.apply_env_overrides();
        config.validate()?;
        debug!(path = %path.display(), api = ?config.api, "Configuration loaded");
        Ok(config)
    }

    /// Parse YAML without environment overrides or validation.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to the defaults.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
            .map_err(|e| DictError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Apply `AIDICT_*` environment variables on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api.key = key;
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api.url = url;
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.is_empty()) {
            self.api.model = model;
        }
    }

    /// Reject unusable settings and normalize the character limit.
    pub fn validate(&mut self) -> Result<()> {
        if self.api.key.is_empty() || self.api.key == PLACEHOLDER_API_KEY {
            return Err(DictError::Config(
                "API key is not set (api.key or AIDICT_API_KEY)".into(),
            ));
        }
        if self.api.url.is_empty() {
            return Err(DictError::Config("api.url must not be empty".into()));
        }
        if self.validation.max_input_chars <= 0 {
            self.validation.max_input_chars = DEFAULT_MAX_INPUT_CHARS;
        }
        Ok(())
    }
}
