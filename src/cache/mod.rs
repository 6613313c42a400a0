//! Persistent definition cache.
//!
//! Definitions are stored once per word key and never updated or expired.
//! [`SqliteStore`] is the production backend; [`MemoryStore`] keeps the same
//! primary-key semantics in memory.

pub mod key;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use key::{normalize_word, word_key};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::DefinitionStore;
