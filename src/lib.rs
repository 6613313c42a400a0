//! aidict: an LLM-backed bilingual dictionary.
//!
//! A word lookup renders a per-language-pair prompt template, asks an
//! OpenAI-compatible chat completions endpoint for a JSON definition, and
//! caches the extracted JSON forever under `"{source}-{target}:{word}"`.
//! The HTTP surface serves raw JSON, a GoldenDict HTML page, and a
//! capability listing for front ends.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod prompts;
pub mod providers;

pub use config::Config;
pub use error::{DictError, Result};
pub use lookup::{Definition, LookupEngine};
pub use prompts::PromptRegistry;
