//! `personas-server` entry point.
//!
//! Loads configuration, starts logging, opens the database and serves the
//! persona routes until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use personas_core::init_logging;
use personas_server::{create_router, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    let log_dir = config
        .resolved_log_dir()
        .context("failed to resolve log directory")?;
    init_logging(config.log_level(), &log_dir).context("failed to initialize logging")?;
    if let Some(path) = env_file {
        info!(
            "event=config_load module=server status=ok env_file={}",
            path.display()
        );
    }
    if config.uses_in_memory_db() {
        warn!("event=config_load module=server status=ok db=memory note=data_not_persisted");
    }

    let conn = config
        .open_database()
        .with_context(|| format!("failed to open database `{}`", config.db_path.display()))?;
    let state = AppState::try_new(conn).context("database is not ready for personas")?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(
        "event=server_start module=server status=ok bind_addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(
            "event=shutdown_signal module=server status=error error={}",
            err
        );
        std::future::pending::<()>().await;
    }
}
