//! The five record types and their validating constructors.
//!
//! Each record is persisted into the collection named after the lowercase
//! of its type name. A constructor takes the decoded request body, checks
//! presence, type and range of every declared field, applies declared
//! defaults, and reports all violated fields at once. Constructors are
//! pure; identifiers are assigned later, by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Record;

use super::errors::SchemaResult;
use super::fields::Payload;

/// Platform user: consultants, clients and admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Free-form role; intended values are consultant | client | admin.
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_active: bool,
}

impl User {
    pub const DEFAULT_ROLE: &'static str = "client";

    /// Validates a decoded request body into a `User`.
    pub fn from_payload(body: &Value) -> SchemaResult<Self> {
        let mut p = Payload::new(body)?;
        let user = Self {
            name: p.required_text("name"),
            email: p.required_email("email"),
            role: p.string_or("role", Self::DEFAULT_ROLE),
            avatar_url: p.optional_string("avatar_url"),
            bio: p.optional_string("bio"),
            is_active: p.bool_or("is_active", true),
        };
        p.finish()?;
        Ok(user)
    }
}

impl Record for User {
    const COLLECTION: &'static str = "user";
}

/// Course offered by a consultant. The consultant reference is a plain
/// identifier string; it is not checked to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub consultant_id: String,
    pub tags: Vec<String>,
    pub is_published: bool,
}

impl Course {
    /// Validates a decoded request body into a `Course`.
    pub fn from_payload(body: &Value) -> SchemaResult<Self> {
        let mut p = Payload::new(body)?;
        let course = Self {
            title: p.required_string("title"),
            description: p.optional_string("description"),
            consultant_id: p.required_string("consultant_id"),
            tags: p.string_array_or_empty("tags"),
            is_published: p.bool_or("is_published", false),
        };
        p.finish()?;
        Ok(course)
    }
}

impl Record for Course {
    const COLLECTION: &'static str = "course";
}

/// Lesson: a piece of content inside a course. Ordering is advisory;
/// no uniqueness is enforced within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub course_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub order: i64,
}

impl Lesson {
    pub const MIN_ORDER: i64 = 1;
    pub const DEFAULT_ORDER: i64 = 1;

    /// Validates a decoded request body into a `Lesson`.
    pub fn from_payload(body: &Value) -> SchemaResult<Self> {
        let mut p = Payload::new(body)?;
        let lesson = Self {
            course_id: p.required_string("course_id"),
            title: p.required_string("title"),
            content: p.optional_string("content"),
            order: p.int_at_least_or("order", Self::MIN_ORDER, Self::DEFAULT_ORDER),
        };
        p.finish()?;
        Ok(lesson)
    }
}

impl Record for Lesson {
    const COLLECTION: &'static str = "lesson";
}

/// Link between a user and a course. The same pair may enroll multiple
/// times; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: String,
    pub course_id: String,
    /// Free-form status; intended values are active | completed | cancelled.
    pub status: String,
}

impl Enrollment {
    pub const DEFAULT_STATUS: &'static str = "active";

    /// Validates a decoded request body into an `Enrollment`.
    pub fn from_payload(body: &Value) -> SchemaResult<Self> {
        let mut p = Payload::new(body)?;
        let enrollment = Self {
            user_id: p.required_string("user_id"),
            course_id: p.required_string("course_id"),
            status: p.string_or("status", Self::DEFAULT_STATUS),
        };
        p.finish()?;
        Ok(enrollment)
    }
}

impl Record for Enrollment {
    const COLLECTION: &'static str = "enrollment";
}

/// 1:1 or group session booking. Overlapping bookings for the same
/// consultant or user are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    pub user_id: String,
    pub consultant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Session {
    pub const MIN_DURATION_MINUTES: i64 = 15;
    pub const MAX_DURATION_MINUTES: i64 = 480;
    pub const DEFAULT_DURATION_MINUTES: i64 = 60;

    /// Validates a decoded request body into a `Session`.
    pub fn from_payload(body: &Value) -> SchemaResult<Self> {
        let mut p = Payload::new(body)?;
        let session = Self {
            title: p.required_string("title"),
            user_id: p.required_string("user_id"),
            consultant_id: p.required_string("consultant_id"),
            course_id: p.optional_string("course_id"),
            start_time: p.required_datetime("start_time"),
            duration_minutes: p.int_in_range_or(
                "duration_minutes",
                Self::MIN_DURATION_MINUTES,
                Self::MAX_DURATION_MINUTES,
                Self::DEFAULT_DURATION_MINUTES,
            ),
            notes: p.optional_string("notes"),
        };
        p.finish()?;
        Ok(session)
    }
}

impl Record for Session {
    const COLLECTION: &'static str = "session";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_defaults() {
        let user = User::from_payload(&json!({
            "name": "Alice",
            "email": "alice@example.com"
        }))
        .unwrap();
        assert_eq!(user.role, "client");
        assert!(user.is_active);
        assert_eq!(user.avatar_url, None);
    }

    #[test]
    fn test_user_role_stays_free_form() {
        let user = User::from_payload(&json!({
            "name": "Bob",
            "email": "bob@example.com",
            "role": "superintendent"
        }))
        .unwrap();
        assert_eq!(user.role, "superintendent");
    }

    #[test]
    fn test_user_empty_name_rejected() {
        let err = User::from_payload(&json!({
            "name": "",
            "email": "a@b.com"
        }))
        .unwrap_err();
        assert!(err.names_field("name"));
    }

    #[test]
    fn test_course_defaults() {
        let course = Course::from_payload(&json!({
            "title": "Scaling 101",
            "consultant_id": "c1"
        }))
        .unwrap();
        assert!(!course.is_published);
        assert!(course.tags.is_empty());
    }

    #[test]
    fn test_lesson_order_below_one_rejected() {
        let err = Lesson::from_payload(&json!({
            "course_id": "c1",
            "title": "Intro",
            "order": 0
        }))
        .unwrap_err();
        assert!(err.names_field("order"));
    }

    #[test]
    fn test_session_duration_boundaries() {
        for minutes in [Session::MIN_DURATION_MINUTES, Session::MAX_DURATION_MINUTES] {
            let session = Session::from_payload(&json!({
                "title": "Kickoff",
                "user_id": "u1",
                "consultant_id": "c1",
                "start_time": "2024-05-01T10:00:00Z",
                "duration_minutes": minutes
            }))
            .unwrap();
            assert_eq!(session.duration_minutes, minutes);
        }
    }

    #[test]
    fn test_session_reports_every_violation() {
        let err = Session::from_payload(&json!({ "duration_minutes": 481 })).unwrap_err();
        assert!(err.names_field("title"));
        assert!(err.names_field("user_id"));
        assert!(err.names_field("consultant_id"));
        assert!(err.names_field("start_time"));
        assert!(err.names_field("duration_minutes"));
        assert_eq!(err.violations().len(), 5);
    }

    #[test]
    fn test_collection_names_are_lowercase_type_names() {
        assert_eq!(User::COLLECTION, "user");
        assert_eq!(Course::COLLECTION, "course");
        assert_eq!(Lesson::COLLECTION, "lesson");
        assert_eq!(Enrollment::COLLECTION, "enrollment");
        assert_eq!(Session::COLLECTION, "session");
    }
}
