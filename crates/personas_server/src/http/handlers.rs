//! Persona route handlers.
//!
//! Each handler emits one `http_request` event with the operation name,
//! persona id when known, response status and duration.

use super::dto::{ErrorResponse, HealthResponse, PersonaDto};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use personas_core::{core_version, Persona, PersonaId};
use std::time::Instant;

type PersonaPath = Result<Path<PersonaId>, PathRejection>;
type PersonaBody = Result<Json<PersonaDto>, JsonRejection>;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

#[utoipa::path(
    get,
    path = "/api/personas",
    tag = "personas",
    responses((status = 200, description = "Every stored persona", body = [PersonaDto]))
)]
pub async fn list_personas(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let result = state
        .with_service(|service| service.list_all())
        .await
        .map(|personas| {
            let body: Vec<PersonaDto> = personas.into_iter().map(PersonaDto::from).collect();
            Json(body).into_response()
        });
    respond("persona_list", None, started, result)
}

#[utoipa::path(
    get,
    path = "/api/personas/{id}",
    tag = "personas",
    params(("id" = i64, Path, description = "Persona id")),
    responses(
        (status = 200, description = "Persona found", body = PersonaDto),
        (status = 404, description = "No persona with this id")
    )
)]
pub async fn get_persona(State(state): State<AppState>, path: PersonaPath) -> Response {
    let started = Instant::now();
    let id = path_id(path);
    let result: Result<Response, ApiError> = async {
        let id = id.ok_or(ApiError::NotFound)?;
        let persona = state
            .with_service(move |service| service.get_by_id(id))
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(persona_response(StatusCode::OK, persona))
    }
    .await;
    respond("persona_get", id, started, result)
}

#[utoipa::path(
    post,
    path = "/api/personas",
    tag = "personas",
    request_body = PersonaDto,
    responses(
        (status = 201, description = "Persona created", body = PersonaDto),
        (status = 400, description = "Invalid field values", body = ErrorResponse)
    )
)]
pub async fn create_persona(State(state): State<AppState>, body: PersonaBody) -> Response {
    let started = Instant::now();
    let result: Result<Persona, ApiError> = async {
        let Json(dto) = body?;
        let input = dto.into_input();
        state.with_service(move |service| service.create(input)).await
    }
    .await;
    let id = result.as_ref().ok().and_then(|persona| persona.id);
    let result = result.map(|persona| persona_response(StatusCode::CREATED, persona));
    respond("persona_create", id, started, result)
}

#[utoipa::path(
    put,
    path = "/api/personas/{id}",
    tag = "personas",
    params(("id" = i64, Path, description = "Persona id")),
    request_body = PersonaDto,
    responses(
        (status = 200, description = "Persona updated", body = PersonaDto),
        (status = 400, description = "Invalid field values", body = ErrorResponse),
        (status = 404, description = "No persona with this id")
    )
)]
pub async fn update_persona(
    State(state): State<AppState>,
    path: PersonaPath,
    body: PersonaBody,
) -> Response {
    let started = Instant::now();
    let id = path_id(path);
    let result: Result<Response, ApiError> = async {
        let id = id.ok_or(ApiError::NotFound)?;
        let Json(dto) = body?;
        let input = dto.into_input();
        let persona = state
            .with_service(move |service| service.update(id, input))
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(persona_response(StatusCode::OK, persona))
    }
    .await;
    respond("persona_update", id, started, result)
}

#[utoipa::path(
    delete,
    path = "/api/personas/{id}",
    tag = "personas",
    params(("id" = i64, Path, description = "Persona id")),
    responses(
        (status = 204, description = "Persona deleted"),
        (status = 404, description = "No persona with this id")
    )
)]
pub async fn delete_persona(State(state): State<AppState>, path: PersonaPath) -> Response {
    let started = Instant::now();
    let id = path_id(path);
    let result: Result<Response, ApiError> = async {
        let id = id.ok_or(ApiError::NotFound)?;
        let deleted = state
            .with_service(move |service| service.delete(id))
            .await?;
        if !deleted {
            return Err(ApiError::NotFound);
        }
        Ok(StatusCode::NO_CONTENT.into_response())
    }
    .await;
    respond("persona_delete", id, started, result)
}

/// A non-numeric path segment names no persona.
fn path_id(path: PersonaPath) -> Option<PersonaId> {
    path.ok().map(|Path(id)| id)
}

fn persona_response(status: StatusCode, persona: Persona) -> Response {
    (status, Json(PersonaDto::from(persona))).into_response()
}

fn respond(
    op: &'static str,
    id: Option<PersonaId>,
    started: Instant,
    result: Result<Response, ApiError>,
) -> Response {
    let response = result.unwrap_or_else(IntoResponse::into_response);
    let status = response.status();
    let id = id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let duration_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        error!(
            "event=http_request module=http status=error op={} id={} http_status={} duration_ms={}",
            op,
            id,
            status.as_u16(),
            duration_ms
        );
    } else {
        info!(
            "event=http_request module=http status={} op={} id={} http_status={} duration_ms={}",
            if status.is_success() { "ok" } else { "rejected" },
            op,
            id,
            status.as_u16(),
            duration_ms
        );
    }
    response
}
