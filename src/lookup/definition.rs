//! Materialized form of a cached definition.
//!
//! The engine passes definitions around as opaque JSON text. Only the HTML
//! renderer and the CLI printer parse them, using the compact wire names
//! (`p`, `defs`, `pos`, `m`, `ex`) the prompts ask the model to produce.

use serde::{Deserialize, Serialize};

/// A headword with its ordered senses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "p", default)]
    pub headword: String,
    #[serde(rename = "defs", default)]
    pub entries: Vec<DefinitionEntry>,
}

/// One sense of the headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    #[serde(rename = "pos", default)]
    pub part_of_speech: String,
    #[serde(rename = "m", default)]
    pub meaning: String,
    #[serde(rename = "ex", default)]
    pub example: String,
}

impl Definition {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
