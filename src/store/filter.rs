//! Exact-match query filters.

use std::collections::BTreeMap;

use serde_json::Value;

/// A mapping of field name to required exact value. The empty filter
/// matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: BTreeMap<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match condition.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Adds an exact-match condition only when a value is present; used
    /// to fold optional query parameters into a filter.
    pub fn with_opt(mut self, field: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.fields.insert(field.into(), Value::String(value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document satisfies every condition. A document that
    /// lacks a filtered field does not match.
    pub fn matches(&self, doc: &Value) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }
}
