//! CLI command implementations.

use crate::api::{AppState, HttpServer, ServerConfig};
use crate::observability::{Logger, Severity};
use crate::store::{Database, DatabaseConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boots the API server: environment config, store handle, runtime,
/// serve loop. CLI flags override the environment.
fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let db_config = DatabaseConfig::from_env();
    let db = Database::open(&db_config);
    if db.is_available() {
        Logger::log(Severity::Info, "database_opened", &[("name", db.name())]);
    } else {
        Logger::log(
            Severity::Warn,
            "database_unavailable",
            &[("hint", "DATABASE_URL is not set; record operations will fail")],
        );
    }

    let server = HttpServer::with_config(config, AppState { db });
    Logger::log(
        Severity::Info,
        "server_starting",
        &[("addr", server.socket_addr().as_str())],
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(e.to_string()))?;
    rt.block_on(server.start())?;
    Ok(())
}
