//! Core domain logic for the persona registry.
//! This crate is the single source of truth for persona invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::persona::{
    Persona, PersonaId, PersonaInput, PersonaValidationError, MAX_NAME_CHARS,
};
pub use repo::persona_repo::{PersonaRepository, RepoError, RepoResult, SqlitePersonaRepository};
pub use service::persona_service::{PersonaService, PersonaServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
