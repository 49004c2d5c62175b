//! Backend seam for the underlying document store.

use serde_json::{Map, Value};

use super::errors::StoreResult;
use super::filter::Filter;

/// Name of the backend-native identifier field on stored documents.
pub const NATIVE_ID_FIELD: &str = "_id";

/// Minimal contract the underlying document store must provide:
/// per-collection inserts with store-assigned identifiers, and
/// exact-match retrieval in the store's natural order.
pub trait DocumentBackend: Send + Sync {
    /// Persists one document in the named collection and returns the
    /// identifier the store assigned to it.
    fn insert_one(&self, collection: &str, document: Map<String, Value>) -> StoreResult<String>;

    /// Returns documents matching the filter, capped at `limit` when
    /// given.
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Value>>;

    /// Names of collections that currently hold documents.
    fn collection_names(&self) -> StoreResult<Vec<String>>;
}
