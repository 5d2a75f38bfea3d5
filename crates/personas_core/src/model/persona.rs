//! Persona domain model.
//!
//! # Responsibility
//! - Define the canonical persona record shared by storage and HTTP layers.
//! - Turn unvalidated incoming field values into accepted records.
//!
//! # Invariants
//! - A persisted persona always carries `id = Some(_)`.
//! - `nombre` and `apellido` are never blank for an accepted record.
//! - `edad` is never negative for an accepted record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned numeric identifier.
pub type PersonaId = i64;

/// Column limit for `nombre` and `apellido`, counted in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Validation failure for persona field values.
///
/// `Display` renders the client-facing message; `code()` is the stable
/// identifier used in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaValidationError {
    MissingNombre,
    MissingApellido,
    InvalidEdad,
    FieldTooLong { field: &'static str, max: usize },
}

impl PersonaValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingNombre => "nombre_required",
            Self::MissingApellido => "apellido_required",
            Self::InvalidEdad => "edad_invalid",
            Self::FieldTooLong { .. } => "field_too_long",
        }
    }
}

impl Display for PersonaValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingNombre => write!(f, "El nombre es requerido"),
            Self::MissingApellido => write!(f, "El apellido es requerido"),
            Self::InvalidEdad => write!(f, "La edad debe ser un valor positivo"),
            Self::FieldTooLong { field, max } => {
                write!(f, "El {field} no puede superar {max} caracteres")
            }
        }
    }
}

impl Error for PersonaValidationError {}

/// Canonical persona record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// `None` until the storage layer assigns one.
    pub id: Option<PersonaId>,
    pub nombre: String,
    pub apellido: String,
    pub edad: i32,
}

impl Persona {
    /// Creates a not-yet-persisted persona.
    pub fn new(nombre: impl Into<String>, apellido: impl Into<String>, edad: i32) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            apellido: apellido.into(),
            edad,
        }
    }

    /// Creates a persona with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: PersonaId,
        nombre: impl Into<String>,
        apellido: impl Into<String>,
        edad: i32,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(nombre, apellido, edad)
        }
    }

    /// Checks every field against the record invariants and column limits.
    ///
    /// Checks run in the order nombre, apellido, edad, lengths; the first
    /// failure wins.
    pub fn validate(&self) -> Result<(), PersonaValidationError> {
        if is_blank(&self.nombre) {
            return Err(PersonaValidationError::MissingNombre);
        }
        if is_blank(&self.apellido) {
            return Err(PersonaValidationError::MissingApellido);
        }
        if self.edad < 0 {
            return Err(PersonaValidationError::InvalidEdad);
        }
        check_length("nombre", &self.nombre)?;
        check_length("apellido", &self.apellido)?;
        Ok(())
    }

    /// Overwrites the mutable fields with `changes`, keeping `self.id`.
    pub fn apply(&mut self, changes: Persona) {
        self.nombre = changes.nombre;
        self.apellido = changes.apellido;
        self.edad = changes.edad;
    }
}

/// Unvalidated persona field values as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaInput {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub edad: Option<i32>,
}

impl PersonaInput {
    pub fn new(nombre: impl Into<String>, apellido: impl Into<String>, edad: i32) -> Self {
        Self {
            nombre: Some(nombre.into()),
            apellido: Some(apellido.into()),
            edad: Some(edad),
        }
    }

    /// Validates presence and range, producing a persona without id.
    ///
    /// Values are kept as given; trimming only decides blankness.
    pub fn into_persona(self) -> Result<Persona, PersonaValidationError> {
        let nombre = match self.nombre {
            Some(value) if !is_blank(&value) => value,
            _ => return Err(PersonaValidationError::MissingNombre),
        };
        let apellido = match self.apellido {
            Some(value) if !is_blank(&value) => value,
            _ => return Err(PersonaValidationError::MissingApellido),
        };
        let edad = match self.edad {
            Some(value) if value >= 0 => value,
            _ => return Err(PersonaValidationError::InvalidEdad),
        };
        Ok(Persona::new(nombre, apellido, edad))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_length(field: &'static str, value: &str) -> Result<(), PersonaValidationError> {
    if value.chars().count() > MAX_NAME_CHARS {
        return Err(PersonaValidationError::FieldTooLong {
            field,
            max: MAX_NAME_CHARS,
        });
    }
    Ok(())
}
