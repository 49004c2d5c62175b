//! Record Validation Tests
//!
//! Every record type rejects payloads that violate its declared fields,
//! reports all violations at once, and applies declared defaults when
//! optional fields are omitted.

use consultancy_lms::schema::{Course, Enrollment, Lesson, Session, User};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn valid_user() -> Value {
    json!({"name": "Alice", "email": "alice@example.com"})
}

fn valid_session() -> Value {
    json!({
        "title": "Kickoff",
        "user_id": "u1",
        "consultant_id": "c1",
        "start_time": "2024-05-01T10:00:00Z"
    })
}

// =============================================================================
// Required Fields
// =============================================================================

/// Omitting a required field yields an error naming that field.
#[test]
fn test_missing_required_field_is_named() {
    let err = User::from_payload(&json!({"email": "a@b.com"})).unwrap_err();
    assert!(err.names_field("name"));

    let err = Course::from_payload(&json!({"title": "T"})).unwrap_err();
    assert!(err.names_field("consultant_id"));

    let err = Lesson::from_payload(&json!({"title": "T"})).unwrap_err();
    assert!(err.names_field("course_id"));

    let err = Enrollment::from_payload(&json!({"user_id": "u1"})).unwrap_err();
    assert!(err.names_field("course_id"));

    let err = Session::from_payload(&valid_user()).unwrap_err();
    assert!(err.names_field("title"));
}

/// All violated fields are reported together, not just the first.
#[test]
fn test_every_violation_reported() {
    let err = Session::from_payload(&json!({"duration_minutes": 1000})).unwrap_err();
    assert!(err.names_field("title"));
    assert!(err.names_field("user_id"));
    assert!(err.names_field("consultant_id"));
    assert!(err.names_field("start_time"));
    assert!(err.names_field("duration_minutes"));
    assert_eq!(err.violations().len(), 5);
}

/// The payload itself must be a JSON object.
#[test]
fn test_non_object_payload_rejected() {
    let err = User::from_payload(&json!("just a string")).unwrap_err();
    assert!(err.names_field("$root"));
}

// =============================================================================
// Field Constraints
// =============================================================================

/// Email accepts valid syntax and rejects invalid syntax.
#[test]
fn test_email_syntax() {
    assert!(User::from_payload(&json!({"name": "A", "email": "a@b.com"})).is_ok());

    let err = User::from_payload(&json!({"name": "A", "email": "not-an-email"})).unwrap_err();
    assert!(err.names_field("email"));
    assert!(err.to_string().contains("valid email address"));
}

/// Name must be a non-empty string.
#[test]
fn test_user_name_must_not_be_empty() {
    let err = User::from_payload(&json!({"name": "", "email": "a@b.com"})).unwrap_err();
    assert!(err.names_field("name"));
}

/// duration_minutes accepts the boundary values and rejects values
/// outside [15, 480].
#[test]
fn test_duration_range_inclusive() {
    for minutes in [15, 480] {
        let mut body = valid_session();
        body["duration_minutes"] = json!(minutes);
        let session = Session::from_payload(&body).unwrap();
        assert_eq!(session.duration_minutes, minutes);
    }

    for minutes in [14, 481] {
        let mut body = valid_session();
        body["duration_minutes"] = json!(minutes);
        let err = Session::from_payload(&body).unwrap_err();
        assert!(err.names_field("duration_minutes"));
        assert!(err.to_string().contains("must be between 15 and 480"));
    }
}

/// Lesson order must be an integer of at least 1.
#[test]
fn test_lesson_order_lower_bound() {
    let base = json!({"course_id": "c1", "title": "Intro"});

    let mut body = base.clone();
    body["order"] = json!(1);
    assert_eq!(Lesson::from_payload(&body).unwrap().order, 1);

    let mut body = base.clone();
    body["order"] = json!(0);
    assert!(Lesson::from_payload(&body).unwrap_err().names_field("order"));
}

/// Wrong JSON types are rejected with the expected type in the message.
#[test]
fn test_type_mismatches_reported() {
    let err = User::from_payload(&json!({"name": 7, "email": "a@b.com"})).unwrap_err();
    assert!(err.to_string().contains("must be a string"));

    let err = Course::from_payload(&json!({
        "title": "T",
        "consultant_id": "c1",
        "tags": "not-a-list"
    }))
    .unwrap_err();
    assert!(err.names_field("tags"));

    let mut body = valid_session();
    body["start_time"] = json!("yesterday");
    let err = Session::from_payload(&body).unwrap_err();
    assert!(err.to_string().contains("RFC 3339"));
}

// =============================================================================
// Defaults
// =============================================================================

/// Declared defaults apply when optional fields are omitted.
#[test]
fn test_defaults_apply() {
    let user = User::from_payload(&valid_user()).unwrap();
    assert_eq!(user.role, "client");
    assert!(user.is_active);

    let course = Course::from_payload(&json!({"title": "T", "consultant_id": "c1"})).unwrap();
    assert!(!course.is_published);
    assert!(course.tags.is_empty());
    assert_eq!(course.description, None);

    let lesson = Lesson::from_payload(&json!({"course_id": "c1", "title": "L"})).unwrap();
    assert_eq!(lesson.order, 1);

    let enrollment =
        Enrollment::from_payload(&json!({"user_id": "u1", "course_id": "c1"})).unwrap();
    assert_eq!(enrollment.status, "active");

    let session = Session::from_payload(&valid_session()).unwrap();
    assert_eq!(session.duration_minutes, 60);
    assert_eq!(session.course_id, None);
}

/// Explicitly supplied values win over defaults.
#[test]
fn test_supplied_values_override_defaults() {
    let mut body = valid_user();
    body["role"] = json!("consultant");
    body["is_active"] = json!(false);
    let user = User::from_payload(&body).unwrap();
    assert_eq!(user.role, "consultant");
    assert!(!user.is_active);
}

// =============================================================================
// Permissive Behaviors
// =============================================================================

/// Undeclared extra fields are ignored, not rejected.
#[test]
fn test_extra_fields_ignored() {
    let mut body = valid_user();
    body["favorite_color"] = json!("green");
    assert!(User::from_payload(&body).is_ok());
}

/// Explicit null on an optional field counts as absent.
#[test]
fn test_null_optional_is_absent() {
    let mut body = valid_user();
    body["bio"] = json!(null);
    let user = User::from_payload(&body).unwrap();
    assert_eq!(user.bio, None);
}

/// Reference fields are plain strings; nothing checks they exist.
#[test]
fn test_references_are_not_resolved() {
    let course = Course::from_payload(&json!({
        "title": "T",
        "consultant_id": "nobody-by-this-id"
    }))
    .unwrap();
    assert_eq!(course.consultant_id, "nobody-by-this-id");
}
