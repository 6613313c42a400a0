//! HTTP surface: JSON lookup, GoldenDict HTML, capability discovery, static files.

pub mod render;
pub mod routes;
pub mod server;

pub use render::GoldenDictRenderer;
pub use server::{build_router, start_server, AppState};
