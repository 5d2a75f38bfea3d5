//! Persona repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find-all / find-by-id / save / delete over the `persona` table.
//! - Map rows to and from `Persona` records.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Persona::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `save` with an unknown id inserts using that id.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::persona::{Persona, PersonaId, PersonaValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PERSONA_TABLE: &str = "persona";
const PERSONA_COLUMNS: &[&str] = &["id", "nombre", "apellido", "edad"];

const PERSONA_SELECT_SQL: &str = "SELECT
    id,
    nombre,
    apellido,
    edad
FROM persona";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persona persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(PersonaValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted persona data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonaValidationError> for RepoError {
    fn from(value: PersonaValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for persona persistence.
pub trait PersonaRepository {
    /// Returns every stored persona in ascending id order.
    fn find_all(&self) -> RepoResult<Vec<Persona>>;
    /// Returns `None` when no row has `id`.
    fn find_by_id(&self, id: PersonaId) -> RepoResult<Option<Persona>>;
    /// Updates the row when `persona.id` exists, inserts otherwise.
    ///
    /// The returned record always has `id = Some(_)`.
    fn save(&self, persona: &Persona) -> RepoResult<Persona>;
    /// Returns whether a row was removed.
    fn delete_by_id(&self, id: PersonaId) -> RepoResult<bool>;
}

/// SQLite-backed persona repository.
pub struct SqlitePersonaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonaRepository<'conn> {
    /// Wraps a connection without checking its schema.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking it was bootstrapped by `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl PersonaRepository for SqlitePersonaRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Persona>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSONA_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut personas = Vec::new();

        while let Some(row) = rows.next()? {
            personas.push(parse_persona_row(row)?);
        }

        Ok(personas)
    }

    fn find_by_id(&self, id: PersonaId) -> RepoResult<Option<Persona>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSONA_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_persona_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, persona: &Persona) -> RepoResult<Persona> {
        persona.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        let id = match persona.id {
            Some(id) => {
                let changed = tx.execute(
                    "UPDATE persona
                     SET
                        nombre = ?1,
                        apellido = ?2,
                        edad = ?3
                     WHERE id = ?4;",
                    params![
                        persona.nombre.as_str(),
                        persona.apellido.as_str(),
                        persona.edad,
                        id
                    ],
                )?;
                if changed == 0 {
                    tx.execute(
                        "INSERT INTO persona (id, nombre, apellido, edad)
                         VALUES (?1, ?2, ?3, ?4);",
                        params![
                            id,
                            persona.nombre.as_str(),
                            persona.apellido.as_str(),
                            persona.edad
                        ],
                    )?;
                }
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO persona (nombre, apellido, edad)
                     VALUES (?1, ?2, ?3);",
                    params![
                        persona.nombre.as_str(),
                        persona.apellido.as_str(),
                        persona.edad
                    ],
                )?;
                tx.last_insert_rowid()
            }
        };
        tx.commit()?;

        Ok(Persona {
            id: Some(id),
            ..persona.clone()
        })
    }

    fn delete_by_id(&self, id: PersonaId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM persona WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn ensure_schema_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [PERSONA_TABLE],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some();
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(PERSONA_TABLE));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({PERSONA_TABLE});"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    for &column in PERSONA_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: PERSONA_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_persona_row(row: &Row<'_>) -> RepoResult<Persona> {
    let id: PersonaId = row.get("id")?;

    let raw_edad: i64 = row.get("edad")?;
    let edad = i32::try_from(raw_edad).map_err(|_| {
        RepoError::InvalidData(format!("edad value `{raw_edad}` out of range in persona.edad"))
    })?;

    let persona = Persona {
        id: Some(id),
        nombre: row.get("nombre")?,
        apellido: row.get("apellido")?,
        edad,
    };
    persona.validate().map_err(|err| {
        RepoError::InvalidData(format!("row id={id} fails validation: {}", err.code()))
    })?;
    Ok(persona)
}
