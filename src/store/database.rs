//! Database handle and the generic insert/query accessors.

use std::sync::Arc;

use serde_json::Value;

use super::backend::DocumentBackend;
use super::config::{DatabaseConfig, DEFAULT_DATABASE_NAME};
use super::errors::{StoreError, StoreResult};
use super::filter::Filter;
use super::memory::MemoryBackend;
use super::record::{normalize_identity, Record, Stored};

/// Handle to the document store.
///
/// The backend is an explicitly passed dependency that may be absent for
/// the whole process lifetime; every operation re-checks it and fails
/// with `StoreError::Unavailable` while no handle exists.
#[derive(Clone)]
pub struct Database {
    backend: Option<Arc<dyn DocumentBackend>>,
    name: String,
}

impl Database {
    /// Opens the store described by `config`. Without a configured URL
    /// the handle stays absent.
    pub fn open(config: &DatabaseConfig) -> Self {
        match &config.url {
            Some(_) => Self::with_backend(Arc::new(MemoryBackend::new()), config.name.clone()),
            None => Self {
                backend: None,
                name: config.name.clone(),
            },
        }
    }

    /// Wraps an externally constructed backend.
    pub fn with_backend(backend: Arc<dyn DocumentBackend>, name: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            name: name.into(),
        }
    }

    /// A connected handle over a fresh in-process backend.
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()), DEFAULT_DATABASE_NAME)
    }

    /// A handle with no backend; every operation reports `Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            backend: None,
            name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }

    /// Logical database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a working store handle exists.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> StoreResult<&dyn DocumentBackend> {
        self.backend.as_deref().ok_or(StoreError::Unavailable)
    }

    /// Persists a validated record and returns the store-assigned
    /// identifier.
    pub fn insert<R: Record>(&self, record: &R) -> StoreResult<String> {
        let backend = self.backend()?;
        let value =
            serde_json::to_value(record).map_err(|e| StoreError::Encode(e.to_string()))?;
        let document = match value {
            Value::Object(document) => document,
            _ => {
                return Err(StoreError::Encode(
                    "record did not encode to a document object".to_string(),
                ))
            }
        };
        backend.insert_one(R::COLLECTION, document)
    }

    /// Returns records matching the exact-match filter, capped at
    /// `limit` when given, identifiers normalized to the public field.
    pub fn query<R: Record>(
        &self,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Stored<R>>> {
        let backend = self.backend()?;
        let documents = backend.find(R::COLLECTION, filter, limit)?;

        let mut records = Vec::with_capacity(documents.len());
        for mut document in documents {
            normalize_identity(&mut document)?;
            let stored =
                serde_json::from_value(document).map_err(|e| StoreError::Decode(e.to_string()))?;
            records.push(stored);
        }
        Ok(records)
    }

    /// Names of collections currently holding documents, capped at
    /// `limit`.
    pub fn collection_names(&self, limit: usize) -> StoreResult<Vec<String>> {
        let mut names = self.backend()?.collection_names()?;
        names.truncate(limit);
        Ok(names)
    }
}
