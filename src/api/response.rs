//! Response body types.

use serde::Serialize;

/// Body returned by every create endpoint: the assigned identifier.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Root banner body.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
}

impl ServiceInfo {
    pub fn new() -> Self {
        Self {
            message: "Consultancy LMS backend running",
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Connectivity report for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub backend: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    pub collections: Vec<String>,
}

impl HealthResponse {
    /// Report for a working store handle.
    pub fn available(name: impl Into<String>, collections: Vec<String>) -> Self {
        Self {
            backend: "running",
            database: "available",
            database_name: Some(name.into()),
            collections,
        }
    }

    /// Report for a degraded process with no store handle.
    pub fn degraded() -> Self {
        Self {
            backend: "running",
            database: "unavailable",
            database_name: None,
            collections: Vec::new(),
        }
    }
}
