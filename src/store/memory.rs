//! Process-local document store backend.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::{Map, Value};
use uuid::Uuid;

use super::backend::{DocumentBackend, NATIVE_ID_FIELD};
use super::errors::{StoreError, StoreResult};
use super::filter::Filter;

/// In-process backend: collections held in memory, documents retained in
/// insertion order, identifiers assigned as fresh UUIDs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBackend for MemoryBackend {
    fn insert_one(&self, collection: &str, mut document: Map<String, Value>) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        document.insert(NATIVE_ID_FIELD.to_string(), Value::String(id.clone()));

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Internal("collection lock poisoned".to_string()))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Value::Object(document));
        Ok(id)
    }

    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Internal("collection lock poisoned".to_string()))?;
        let documents = match collections.get(collection) {
            Some(documents) => documents,
            None => return Ok(Vec::new()),
        };

        let matching = documents.iter().filter(|doc| filter.matches(doc));
        let found = match limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        };
        Ok(found)
    }

    fn collection_names(&self) -> StoreResult<Vec<String>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Internal("collection lock poisoned".to_string()))?;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
