//! Route handlers.

pub mod config;
pub mod golden_dict;
pub mod health;
pub mod lookup;
