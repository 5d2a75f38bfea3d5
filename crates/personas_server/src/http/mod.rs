//! HTTP resource for the persona registry.
//!
//! # Responsibility
//! - Bind `/api/personas` routes to `PersonaService` operations.
//! - Convert service results into status codes and JSON bodies.
//!
//! # Invariants
//! - Validation failures are 400 with `{message}`; missing ids are 404
//!   with an empty body.
//! - Storage error details are logged, never returned to clients.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use router::{create_router, PERSONAS_BASE_PATH};
pub use state::AppState;
