//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persona data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Persona::validate()` before persistence.
//! - A missing id is reported as an empty result, never as an error.

pub mod persona_repo;
