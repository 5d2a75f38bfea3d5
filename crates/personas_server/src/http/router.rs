//! Route table.

use super::handlers;
use super::openapi::openapi_json;
use super::state::AppState;
use axum::routing::{get, MethodRouter};
use axum::Router;

pub const PERSONAS_BASE_PATH: &str = "/api/personas";

/// Builds the application router over `state`.
///
/// The collection answers with and without a trailing slash.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi_json))
        .route(PERSONAS_BASE_PATH, collection_routes())
        .route(&format!("{PERSONAS_BASE_PATH}/"), collection_routes())
        .route(
            &format!("{PERSONAS_BASE_PATH}/:id"),
            get(handlers::get_persona)
                .put(handlers::update_persona)
                .delete(handlers::delete_persona),
        )
        .with_state(state)
}

fn collection_routes() -> MethodRouter<AppState> {
    get(handlers::list_personas).post(handlers::create_persona)
}
