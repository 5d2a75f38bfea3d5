//! OpenAPI document for the persona routes.

use super::dto::{ErrorResponse, PersonaDto};
use super::handlers;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Personas API", description = "CRUD de personas"),
    paths(
        handlers::list_personas,
        handlers::get_persona,
        handlers::create_persona,
        handlers::update_persona,
        handlers::delete_persona
    ),
    components(schemas(PersonaDto, ErrorResponse)),
    tags((name = "personas", description = "Gestión de personas"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
