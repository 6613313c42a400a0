//! Word lookup pipeline: cache, prompt, completion, extraction.

pub mod definition;
pub mod engine;
pub mod extract;

pub use definition::{Definition, DefinitionEntry};
pub use engine::LookupEngine;
pub use extract::extract_json;
