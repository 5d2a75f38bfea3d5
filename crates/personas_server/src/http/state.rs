//! Shared application state for HTTP handlers.
//!
//! # Invariants
//! - One SQLite connection per process, guarded by a mutex.
//! - Service calls run on the blocking pool, never on async workers.

use super::error::ApiError;
use personas_core::{PersonaService, RepoResult, ServiceResult, SqlitePersonaRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection after checking its schema is ready for personas.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        SqlitePersonaRepository::try_new(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `op` against a service wired to the shared connection.
    ///
    /// The connection stays locked for the whole call, which serializes
    /// writes across requests.
    pub async fn with_service<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&PersonaService<SqlitePersonaRepository<'_>>) -> ServiceResult<T>
            + Send
            + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let outcome = tokio::task::spawn_blocking(move || {
            // A panicking request leaves no open transaction behind, so the
            // connection is still usable.
            let guard = conn.lock().unwrap_or_else(PoisonError::into_inner);
            let service = PersonaService::new(SqlitePersonaRepository::new(&guard));
            op(&service)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("blocking task failed: {err}")))?;

        outcome.map_err(ApiError::from)
    }
}
