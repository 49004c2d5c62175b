//! Typed record-to-document mapping.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::backend::NATIVE_ID_FIELD;
use super::errors::{StoreError, StoreResult};

/// Public name under which the store identifier is exposed on returned
/// records, distinct from the backend-native field name.
pub const PUBLIC_ID_FIELD: &str = "id";

/// A persistable record type bound to its collection.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection holding documents of this type.
    const COLLECTION: &'static str;
}

/// A record as returned from the store, with its assigned identifier
/// exposed under the public field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<R> {
    pub id: String,
    #[serde(flatten)]
    pub record: R,
}

/// Moves the backend-native identifier to the public `id` field,
/// converting it to its string representation.
pub fn normalize_identity(doc: &mut Value) -> StoreResult<()> {
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| StoreError::Decode("stored document is not an object".to_string()))?;
    let native = obj.remove(NATIVE_ID_FIELD).ok_or_else(|| {
        StoreError::Decode(format!("stored document missing '{}'", NATIVE_ID_FIELD))
    })?;
    let id = match native {
        Value::String(id) => id,
        other => other.to_string(),
    };
    obj.insert(PUBLIC_ID_FIELD.to_string(), Value::String(id));
    Ok(())
}
