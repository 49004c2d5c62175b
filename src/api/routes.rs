//! Route handlers: one create and one list operation per record type.
//!
//! Every handler is a straight line: validate the payload against the
//! record schema, hand it to the storage accessor, return the result.
//! No handler holds state between requests.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::schema::{Course, Enrollment, Lesson, Session, User};
use crate::store::{Database, Filter, Stored};

use super::errors::ApiResult;
use super::response::{CreatedResponse, HealthResponse, ServiceInfo};

/// Listing cap for the user collection; the other collections list
/// unbounded.
pub const USER_LIST_LIMIT: usize = 50;

/// Collections shown by the health report.
const HEALTH_COLLECTION_LIMIT: usize = 10;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route("/courses", get(list_courses).post(create_course))
        .route("/lessons", get(list_lessons).post(create_lesson))
        .route("/enrollments", get(list_enrollments).post(create_enrollment))
        .route("/sessions", get(list_sessions).post(create_session))
        .with_state(state)
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    if !state.db.is_available() {
        return Json(HealthResponse::degraded());
    }
    let collections = state
        .db
        .collection_names(HEALTH_COLLECTION_LIMIT)
        .unwrap_or_default();
    Json(HealthResponse::available(state.db.name(), collections))
}

async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let record = User::from_payload(&body)?;
    let id = state.db.insert(&record)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<Stored<User>>>> {
    let records = state.db.query::<User>(&Filter::new(), Some(USER_LIST_LIMIT))?;
    Ok(Json(records))
}

async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let record = Course::from_payload(&body)?;
    let id = state.db.insert(&record)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<Stored<Course>>>> {
    let records = state.db.query::<Course>(&Filter::new(), None)?;
    Ok(Json(records))
}

async fn create_lesson(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let record = Lesson::from_payload(&body)?;
    let id = state.db.insert(&record)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Optional exact-match filters for lesson listing.
#[derive(Debug, Default, Deserialize)]
struct LessonListParams {
    course_id: Option<String>,
}

async fn list_lessons(
    State(state): State<AppState>,
    Query(params): Query<LessonListParams>,
) -> ApiResult<Json<Vec<Stored<Lesson>>>> {
    let filter = Filter::new().with_opt("course_id", params.course_id);
    let records = state.db.query::<Lesson>(&filter, None)?;
    Ok(Json(records))
}

async fn create_enrollment(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let record = Enrollment::from_payload(&body)?;
    let id = state.db.insert(&record)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Optional exact-match filters for enrollment listing.
#[derive(Debug, Default, Deserialize)]
struct EnrollmentListParams {
    user_id: Option<String>,
    course_id: Option<String>,
}

async fn list_enrollments(
    State(state): State<AppState>,
    Query(params): Query<EnrollmentListParams>,
) -> ApiResult<Json<Vec<Stored<Enrollment>>>> {
    let filter = Filter::new()
        .with_opt("user_id", params.user_id)
        .with_opt("course_id", params.course_id);
    let records = state.db.query::<Enrollment>(&filter, None)?;
    Ok(Json(records))
}

async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let record = Session::from_payload(&body)?;
    let id = state.db.insert(&record)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Optional exact-match filters for session listing.
#[derive(Debug, Default, Deserialize)]
struct SessionListParams {
    consultant_id: Option<String>,
    user_id: Option<String>,
}

async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<SessionListParams>,
) -> ApiResult<Json<Vec<Stored<Session>>>> {
    let filter = Filter::new()
        .with_opt("consultant_id", params.consultant_id)
        .with_opt("user_id", params.user_id);
    let records = state.db.query::<Session>(&filter, None)?;
    Ok(Json(records))
}
