//! Validation error types for the record schemas.
//!
//! A failed validation reports every violated field, not only the first
//! one, so callers can fix their payload in a single round trip.

use std::fmt;

use serde::Serialize;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path within the payload (e.g. "duration_minutes", "tags[2]")
    pub field: String,
    /// Human-readable constraint that failed
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A required field that was absent.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }

    /// A field whose JSON type did not match the declared one.
    pub fn type_mismatch(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(field, format!("must be {}, got {}", expected, actual))
    }

    /// A string field that must not be empty.
    pub fn empty(field: impl Into<String>) -> Self {
        Self::new(field, "must not be empty")
    }

    /// An email field that failed the syntax check.
    pub fn invalid_email(field: impl Into<String>) -> Self {
        Self::new(field, "must be a valid email address")
    }

    /// An integer field outside its inclusive range.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64) -> Self {
        Self::new(field, format!("must be between {} and {}", min, max))
    }

    /// An integer field below its lower bound.
    pub fn too_small(field: impl Into<String>, min: i64) -> Self {
        Self::new(field, format!("must be at least {}", min))
    }

    /// A date-time field that could not be parsed.
    pub fn invalid_datetime(field: impl Into<String>) -> Self {
        Self::new(field, "must be an RFC 3339 date-time")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Validation failure carrying every violated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Create a validation error from the accumulated violations.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Create a validation error from a single violation.
    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Returns all recorded violations.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Consumes the error, yielding its violations.
    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// Whether any violation refers to the given field.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema validation.
pub type SchemaResult<T> = Result<T, ValidationError>;
