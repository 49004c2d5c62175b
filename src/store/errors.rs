//! Storage accessor error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the storage accessor.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No working store handle exists. Not retryable; remediation is
    /// fixing the connection configuration.
    #[error("document store is not available")]
    Unavailable,

    /// A record could not be encoded into a document.
    #[error("failed to encode record: {0}")]
    Encode(String),

    /// A stored document could not be decoded into its record type.
    #[error("failed to decode stored document: {0}")]
    Decode(String),

    /// Backend-internal failure (e.g. a poisoned lock).
    #[error("internal store error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "document store is not available"
        );
    }

    #[test]
    fn test_decode_carries_reason() {
        let err = StoreError::Decode("missing field".to_string());
        assert!(err.to_string().contains("missing field"));
    }
}
