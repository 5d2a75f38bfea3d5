//! Persona use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for the HTTP layer.
//! - Validate incoming field values before delegating to the repository.
//!
//! # Invariants
//! - Validation order is nombre, apellido, edad; only the first failure is
//!   reported.
//! - `update` on a missing id returns `Ok(None)` without validating input.
//! - Service layer remains storage-agnostic.

use crate::model::persona::{Persona, PersonaId, PersonaInput, PersonaValidationError};
use crate::repo::persona_repo::{PersonaRepository, RepoError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, PersonaServiceError>;

/// Service error for persona use-cases.
#[derive(Debug)]
pub enum PersonaServiceError {
    /// Incoming data failed a required-field or range check.
    Validation(PersonaValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PersonaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersonaServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<PersonaValidationError> for PersonaServiceError {
    fn from(value: PersonaValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for PersonaServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for persona CRUD operations.
pub struct PersonaService<R: PersonaRepository> {
    repo: R,
}

impl<R: PersonaRepository> PersonaService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored persona.
    pub fn list_all(&self) -> ServiceResult<Vec<Persona>> {
        Ok(self.repo.find_all()?)
    }

    /// Gets one persona by id.
    pub fn get_by_id(&self, id: PersonaId) -> ServiceResult<Option<Persona>> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// Validates `input` and persists it as a new persona.
    ///
    /// # Contract
    /// - The stored record always gets a fresh storage-assigned id.
    /// - Returns the persisted record.
    pub fn create(&self, input: PersonaInput) -> ServiceResult<Persona> {
        let persona = validated("create", input)?;
        let created = self.repo.save(&persona)?;
        Ok(created)
    }

    /// Overwrites `nombre`, `apellido` and `edad` of an existing persona.
    ///
    /// # Contract
    /// - Missing id -> `Ok(None)`; `input` is not inspected.
    /// - Invalid input -> `Err(Validation)`; the stored record is untouched.
    /// - Success -> `Ok(Some(updated))` with the original id.
    pub fn update(&self, id: PersonaId, input: PersonaInput) -> ServiceResult<Option<Persona>> {
        let Some(mut existing) = self.repo.find_by_id(id)? else {
            return Ok(None);
        };

        let changes = validated("update", input)?;
        existing.apply(changes);
        let updated = self.repo.save(&existing)?;
        Ok(Some(updated))
    }

    /// Deletes a persona by id, returning whether it existed.
    pub fn delete(&self, id: PersonaId) -> ServiceResult<bool> {
        Ok(self.repo.delete_by_id(id)?)
    }
}

fn validated(operation: &'static str, input: PersonaInput) -> ServiceResult<Persona> {
    input.into_persona().map_err(|err| {
        warn!(
            "event=persona_validation module=service status=rejected op={} error_code={}",
            operation,
            err.code()
        );
        PersonaServiceError::Validation(err)
    })
}
