//! Wire representations for persona requests and responses.

use personas_core::{Persona, PersonaId, PersonaInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON shape shared by requests and responses.
///
/// Every field is optional on input so that missing values reach service
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonaDto {
    /// Server-assigned; ignored on input.
    #[schema(value_type = Option<i64>, example = 1, read_only)]
    pub id: Option<PersonaId>,
    /// Required, 1 to 100 characters.
    #[schema(example = "Juan", min_length = 1, max_length = 100)]
    pub nombre: Option<String>,
    /// Required, 1 to 100 characters.
    #[schema(example = "Pérez", min_length = 1, max_length = 100)]
    pub apellido: Option<String>,
    /// Required age in years, zero or more.
    #[schema(example = 30, minimum = 0)]
    pub edad: Option<i32>,
}

impl PersonaDto {
    /// Drops `id` and hands the remaining fields to validation.
    pub fn into_input(self) -> PersonaInput {
        PersonaInput {
            nombre: self.nombre,
            apellido: self.apellido,
            edad: self.edad,
        }
    }
}

impl From<Persona> for PersonaDto {
    fn from(persona: Persona) -> Self {
        Self {
            id: persona.id,
            nombre: Some(persona.nombre),
            apellido: Some(persona.apellido),
            edad: Some(persona.edad),
        }
    }
}

/// Body of every 400/500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "El nombre es requerido")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
