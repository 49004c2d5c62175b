//! HTTP boundary: configuration, routing and error mapping.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{CreatedResponse, HealthResponse, ServiceInfo};
pub use routes::{router, AppState, USER_LIST_LIMIT};
pub use server::HttpServer;
