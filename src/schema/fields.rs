//! Payload reader for record validation.
//!
//! Wraps an incoming JSON object and extracts typed fields while
//! accumulating a violation for every field that fails its constraint.
//! Getters return a placeholder on failure; `finish` rejects the whole
//! payload whenever any violation was recorded, so placeholders never
//! reach the store.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::email::is_valid_email;
use super::errors::{FieldViolation, SchemaResult, ValidationError};

/// Name of a JSON value's type, for type-mismatch messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reader over one decoded request body.
#[derive(Debug)]
pub(crate) struct Payload<'a> {
    obj: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> Payload<'a> {
    /// Wraps a request body; the body itself must be a JSON object.
    pub fn new(body: &'a Value) -> SchemaResult<Self> {
        match body.as_object() {
            Some(obj) => Ok(Self {
                obj,
                violations: Vec::new(),
            }),
            None => Err(ValidationError::single(FieldViolation::type_mismatch(
                "$root",
                "an object",
                json_type_name(body),
            ))),
        }
    }

    fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// A required field; absence records a violation. Explicit null is
    /// handed to the typed getter, which reports the type mismatch.
    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.obj.get(field) {
            Some(value) => Some(value),
            None => {
                self.push(FieldViolation::missing(field));
                None
            }
        }
    }

    /// An optional field; absent and explicit null are both treated as
    /// not provided.
    fn optional(&self, field: &str) -> Option<&'a Value> {
        self.obj.get(field).filter(|v| !v.is_null())
    }

    /// Required string field.
    pub fn required_string(&mut self, field: &str) -> String {
        match self.required(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                let violation = FieldViolation::type_mismatch(field, "a string", json_type_name(other));
                self.push(violation);
                String::new()
            }
            None => String::new(),
        }
    }

    /// Required string that must also be non-empty.
    pub fn required_text(&mut self, field: &str) -> String {
        match self.required(field) {
            Some(Value::String(s)) if s.is_empty() => {
                self.push(FieldViolation::empty(field));
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                let violation = FieldViolation::type_mismatch(field, "a string", json_type_name(other));
                self.push(violation);
                String::new()
            }
            None => String::new(),
        }
    }

    /// Required string holding a syntactically valid email address.
    pub fn required_email(&mut self, field: &str) -> String {
        match self.required(field) {
            Some(Value::String(s)) if is_valid_email(s) => s.clone(),
            Some(Value::String(_)) => {
                self.push(FieldViolation::invalid_email(field));
                String::new()
            }
            Some(other) => {
                let violation = FieldViolation::type_mismatch(field, "a string", json_type_name(other));
                self.push(violation);
                String::new()
            }
            None => String::new(),
        }
    }

    /// Required RFC 3339 date-time.
    pub fn required_datetime(&mut self, field: &str) -> DateTime<Utc> {
        match self.required(field) {
            Some(Value::String(s)) => match DateTime::parse_from_rfc3339(s) {
                Ok(dt) => dt.with_timezone(&Utc),
                Err(_) => {
                    self.push(FieldViolation::invalid_datetime(field));
                    DateTime::UNIX_EPOCH
                }
            },
            Some(other) => {
                let violation =
                    FieldViolation::type_mismatch(field, "a date-time string", json_type_name(other));
                self.push(violation);
                DateTime::UNIX_EPOCH
            }
            None => DateTime::UNIX_EPOCH,
        }
    }

    /// Optional string; absent yields None.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.optional(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                let violation = FieldViolation::type_mismatch(field, "a string", json_type_name(other));
                self.push(violation);
                None
            }
            None => None,
        }
    }

    /// Optional string with a declared default.
    pub fn string_or(&mut self, field: &str, default: &str) -> String {
        self.optional_string(field)
            .unwrap_or_else(|| default.to_string())
    }

    /// Optional boolean with a declared default.
    pub fn bool_or(&mut self, field: &str, default: bool) -> bool {
        match self.optional(field) {
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                let violation =
                    FieldViolation::type_mismatch(field, "a boolean", json_type_name(other));
                self.push(violation);
                default
            }
            None => default,
        }
    }

    /// Optional integer within an inclusive range, with a declared default.
    pub fn int_in_range_or(&mut self, field: &str, min: i64, max: i64, default: i64) -> i64 {
        match self.optional(field) {
            Some(value) => match value.as_i64() {
                Some(n) if (min..=max).contains(&n) => n,
                Some(_) => {
                    self.push(FieldViolation::out_of_range(field, min, max));
                    default
                }
                None => {
                    let violation =
                        FieldViolation::type_mismatch(field, "an integer", json_type_name(value));
                    self.push(violation);
                    default
                }
            },
            None => default,
        }
    }

    /// Optional integer with a lower bound, with a declared default.
    pub fn int_at_least_or(&mut self, field: &str, min: i64, default: i64) -> i64 {
        match self.optional(field) {
            Some(value) => match value.as_i64() {
                Some(n) if n >= min => n,
                Some(_) => {
                    self.push(FieldViolation::too_small(field, min));
                    default
                }
                None => {
                    let violation =
                        FieldViolation::type_mismatch(field, "an integer", json_type_name(value));
                    self.push(violation);
                    default
                }
            },
            None => default,
        }
    }

    /// Optional array of strings, defaulting to empty.
    pub fn string_array_or_empty(&mut self, field: &str) -> Vec<String> {
        match self.optional(field) {
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                let mut clean = true;
                for (idx, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        other => {
                            let violation = FieldViolation::type_mismatch(
                                format!("{}[{}]", field, idx),
                                "a string",
                                json_type_name(other),
                            );
                            self.push(violation);
                            clean = false;
                        }
                    }
                }
                if clean {
                    out
                } else {
                    Vec::new()
                }
            }
            Some(other) => {
                let violation =
                    FieldViolation::type_mismatch(field, "an array of strings", json_type_name(other));
                self.push(violation);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Consumes the reader; errors when any violation was recorded.
    pub fn finish(self) -> SchemaResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_payload_rejected() {
        let err = Payload::new(&json!([1, 2, 3])).unwrap_err();
        assert!(err.names_field("$root"));
    }

    #[test]
    fn test_missing_required_recorded() {
        let body = json!({});
        let mut p = Payload::new(&body).unwrap();
        let value = p.required_string("name");
        assert!(value.is_empty());
        assert!(p.finish().unwrap_err().names_field("name"));
    }

    #[test]
    fn test_required_null_is_type_mismatch() {
        let body = json!({ "name": null });
        let mut p = Payload::new(&body).unwrap();
        p.required_string("name");
        let err = p.finish().unwrap_err();
        assert!(err.violations()[0].message.contains("got null"));
    }

    #[test]
    fn test_optional_null_is_absent() {
        let body = json!({ "bio": null });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.optional_string("bio"), None);
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_int_range_boundaries_inclusive() {
        let body = json!({ "low": 15, "high": 480 });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.int_in_range_or("low", 15, 480, 60), 15);
        assert_eq!(p.int_in_range_or("high", 15, 480, 60), 480);
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_fractional_number_is_not_an_integer() {
        let body = json!({ "order": 1.5 });
        let mut p = Payload::new(&body).unwrap();
        p.int_at_least_or("order", 1, 1);
        let err = p.finish().unwrap_err();
        assert!(err.violations()[0].message.contains("must be an integer"));
    }

    #[test]
    fn test_string_array_reports_element_path() {
        let body = json!({ "tags": ["ok", 7] });
        let mut p = Payload::new(&body).unwrap();
        p.string_array_or_empty("tags");
        assert!(p.finish().unwrap_err().names_field("tags[1]"));
    }
}
