//! HTTP server: router assembly, CORS and the serve loop.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{Logger, Severity};

use super::config::ServerConfig;
use super::routes::{self, AppState};

/// HTTP server for the LMS API.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given state with default configuration.
    pub fn new(state: AppState) -> Self {
        Self::with_config(ServerConfig::default(), state)
    }

    /// Create a server with custom configuration.
    pub fn with_config(config: ServerConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        // No configured origins means any caller is allowed.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        routes::router(state).layer(cors)
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::log(
            Severity::Info,
            "server_listening",
            &[("addr", addr.to_string().as_str())],
        );
        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Database;

    fn test_state() -> AppState {
        AppState {
            db: Database::in_memory(),
        }
    }

    #[test]
    fn test_default_socket_addr() {
        let server = HttpServer::new(test_state());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config, test_state());
        let _router = server.router();
    }
}
