//! Language-pair prompt templates loaded from disk at startup.

pub mod registry;

pub use registry::{pair_key, render, PromptRegistry, TEMPLATE_SUFFIX, WORD_MARKER};
