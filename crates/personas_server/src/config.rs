//! Runtime configuration for the HTTP server.
//!
//! Every flag falls back to a `PERSONAS_*` environment variable, which may
//! come from a `.env` file loaded at startup.

use clap::Parser;
use personas_core::db::{open_db, open_db_in_memory, DbResult};
use personas_core::default_log_level;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::path::PathBuf;

/// `--db-path` value selecting a throwaway in-memory database.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

#[derive(Debug, Clone, Parser)]
#[command(name = "personas-server")]
#[command(version, about = "HTTP CRUD service for personas", long_about = None)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "PERSONAS_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// SQLite database file, or `:memory:`.
    #[arg(long, env = "PERSONAS_DB_PATH", default_value = "personas.sqlite3")]
    pub db_path: PathBuf,

    /// One of trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "PERSONAS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files. Relative paths resolve against cwd.
    #[arg(long, env = "PERSONAS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Returns the absolute log directory, `<cwd>/logs` when unset.
    pub fn resolved_log_dir(&self) -> std::io::Result<PathBuf> {
        let dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs"));
        if dir.is_absolute() {
            return Ok(dir);
        }
        Ok(std::env::current_dir()?.join(dir))
    }

    pub fn uses_in_memory_db(&self) -> bool {
        self.db_path.as_os_str() == IN_MEMORY_DB_PATH
    }

    /// Opens the configured database with migrations applied.
    pub fn open_database(&self) -> DbResult<Connection> {
        if self.uses_in_memory_db() {
            open_db_in_memory()
        } else {
            open_db(&self.db_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn explicit_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "personas-server",
            "--bind-addr",
            "127.0.0.1:9090",
            "--db-path",
            ":memory:",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/personas",
        ])
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9090");
        assert!(config.uses_in_memory_db());
        assert_eq!(config.log_level(), "warn");
        assert_eq!(
            config.resolved_log_dir().unwrap(),
            PathBuf::from("/var/log/personas")
        );
    }

    #[test]
    fn relative_log_dir_resolves_against_cwd() {
        let config =
            ServerConfig::try_parse_from(["personas-server", "--log-dir", "tmp-logs"]).unwrap();

        let resolved = config.resolved_log_dir().unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("tmp-logs"));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let result = ServerConfig::try_parse_from(["personas-server", "--bind-addr", "nowhere"]);
        assert!(result.is_err());
    }

    #[test]
    fn in_memory_database_opens_with_schema() {
        let config =
            ServerConfig::try_parse_from(["personas-server", "--db-path", ":memory:"]).unwrap();
        let conn = config.open_database().unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM persona;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
