//! Document store configuration.

use std::env;

/// Default logical database name.
pub const DEFAULT_DATABASE_NAME: &str = "consultancy_lms";

/// Connection configuration for the document store.
///
/// A missing URL is a supported state: the handle is then never
/// established and the service runs degraded, failing every store
/// operation until the configuration is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: String,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL` and `DATABASE_NAME` from the environment.
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            name: env::var("DATABASE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}
