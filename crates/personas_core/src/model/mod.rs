//! Domain model for the persona registry.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field validation shared by service and repository layers.
//!
//! # Invariants
//! - Every persisted record is identified by a storage-assigned `PersonaId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod persona;
