//! HTTP surface for the persona registry.

pub mod config;
pub mod http;

pub use config::ServerConfig;
pub use http::{create_router, AppState};
