//! HTTP error mapping.

use super::dto::ErrorResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use personas_core::{PersonaServiceError, PersonaValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

#[derive(Debug)]
pub enum ApiError {
    /// Field values failed validation.
    Validation(PersonaValidationError),
    /// Body is not a JSON persona.
    MalformedBody(String),
    /// Path id is unknown or not numeric.
    NotFound,
    /// Storage or runtime failure; the detail stays in the logs.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MalformedBody(reason) => write!(f, "{reason}"),
            Self::NotFound => write!(f, "not found"),
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonaServiceError> for ApiError {
    fn from(value: PersonaServiceError) -> Self {
        match value {
            PersonaServiceError::Validation(err) => Self::Validation(err),
            PersonaServiceError::Repo(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::MalformedBody(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound => status.into_response(),
            Self::Validation(err) => message_response(status, err.to_string()),
            Self::MalformedBody(reason) => message_response(status, reason),
            Self::Internal(detail) => {
                error!(
                    "event=http_internal_error module=http status=error error={}",
                    detail
                );
                message_response(status, INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { message })).into_response()
}
