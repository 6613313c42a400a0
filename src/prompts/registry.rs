//! Prompt templates keyed by language pair.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;

/// File extension of template files; the rest of the name is the pair key.
pub const TEMPLATE_SUFFIX: &str = ".txt";

/// Substitution marker replaced with the normalized word.
pub const WORD_MARKER: &str = "${word}";

/// Build the `source-target` key used for template selection.
pub fn pair_key(source: &str, target: &str) -> String {
    format!("{}-{}", source, target)
}

/// Replace every [`WORD_MARKER`] in `template` with `word`.
pub fn render(template: &str, word: &str) -> String {
    template.replace(WORD_MARKER, word)
}

/// Immutable `pair key -> template text` mapping.
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate it after construction, so concurrent lookups need no locking.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    templates: HashMap<String, String>,
}

impl PromptRegistry {
    /// Load every `*.txt` file in `dir`.
    ///
    /// Unreadable files are skipped with a warning. An empty result is also
    /// only a warning: the service starts, and every lookup fails with
    /// "unsupported language pair" until templates are added. Failing to
    /// list the directory itself is an error.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir)?;
        let mut templates = HashMap::new();

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(key) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(TEMPLATE_SUFFIX))
            else {
                continue;
            };

            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    info!(pair = %key, "Loaded prompt template");
                    templates.insert(key.to_string(), content);
                }
                Err(e) => {
                    warn!(
                        file = %path.display(),
                        error = %e,
                        "Could not read prompt template; skipping"
                    );
                }
            }
        }

        if templates.is_empty() {
            warn!(
                dir = %dir.display(),
                "No prompt templates were loaded; every lookup will be rejected"
            );
        }

        Ok(Self { templates })
    }

    /// Build a registry from in-memory `(pair key, template)` pairs.
    pub fn from_templates<K, V>(templates: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Template for `pair_key`, if that pair is supported.
    pub fn get(&self, pair_key: &str) -> Option<&str> {
        self.templates.get(pair_key).map(String::as_str)
    }

    /// Supported pair keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Group pair keys as `source -> [targets]`.
    ///
    /// Keys that do not split into exactly two parts on `-` are not
    /// advertised (they remain usable for lookups).
    pub fn available_pairs(&self) -> BTreeMap<String, Vec<String>> {
        let mut pairs: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for key in self.templates.keys() {
            let parts: Vec<&str> = key.split('-').collect();
            if let [source, target] = parts.as_slice() {
                pairs
                    .entry((*source).to_string())
                    .or_default()
                    .push((*target).to_string());
            }
        }
        for targets in pairs.values_mut() {
            targets.sort();
        }
        pairs
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pair_key_format() {
        assert_eq!(pair_key("en", "zh"), "en-zh");
        // codes keep the caller's case
        assert_eq!(pair_key("EN", "zh"), "EN-zh");
    }

    #[test]
    fn test_render_replaces_every_marker() {
        let out = render("Define ${word}. Use ${word} in a sentence.", "run");
        assert_eq!(out, "Define run. Use run in a sentence.");
    }

    #[test]
    fn test_render_without_marker() {
        assert_eq!(render("static prompt", "run"), "static prompt");
    }

    #[test]
    fn test_load_dir_reads_txt_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("en-zh.txt"), "EN->ZH ${word}").unwrap();
        std::fs::write(tmp.path().join("en-fr.txt"), "EN->FR ${word}").unwrap();
        std::fs::write(tmp.path().join("README.md"), "not a template").unwrap();
        std::fs::create_dir(tmp.path().join("nested.txt")).unwrap();

        let registry = PromptRegistry::load_dir(tmp.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("en-zh"), Some("EN->ZH ${word}"));
        assert_eq!(registry.get("en-fr"), Some("EN->FR ${word}"));
        assert!(registry.get("README").is_none());
        assert!(registry.get("nested").is_none());
    }

    #[test]
    fn test_load_dir_empty_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let registry = PromptRegistry::load_dir(tmp.path()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get("en-zh").is_none());
    }

    #[test]
    fn test_load_dir_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(PromptRegistry::load_dir(&tmp.path().join("absent")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dir_skips_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("en-de.txt"), [0xff, 0xfe, 0x00]).unwrap();
        std::fs::write(tmp.path().join("en-es.txt"), "ok").unwrap();
        let registry = PromptRegistry::load_dir(tmp.path()).unwrap();
        assert_eq!(registry.keys(), vec!["en-es"]);
    }

    #[test]
    fn test_available_pairs_grouped_and_sorted() {
        let registry = PromptRegistry::from_templates([
            ("en-zh", "a"),
            ("en-fr", "b"),
            ("zh-en", "c"),
            ("pt-br-en", "d"),
        ]);
        let pairs = registry.available_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["en"], vec!["fr".to_string(), "zh".to_string()]);
        assert_eq!(pairs["zh"], vec!["en".to_string()]);
        assert!(!pairs.contains_key("pt"));
        // still usable for lookups
        assert_eq!(registry.get("pt-br-en"), Some("d"));
    }
}
