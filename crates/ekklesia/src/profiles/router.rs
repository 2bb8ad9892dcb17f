use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::completion::completion_report;
use super::domain::{ProfileId, ProfilePatch, ProfileRegistration};
use super::repository::{ProfileRepository, RepositoryError};
use super::service::{ProfileService, ProfileServiceError};

/// Router builder exposing registration, edits, and completion scoring.
pub fn profile_router<R>(service: Arc<ProfileService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/profiles", post(register_handler::<R>))
        .route(
            "/api/v1/profiles/:profile_id",
            get(show_handler::<R>).patch(update_handler::<R>),
        )
        .route(
            "/api/v1/profiles/:profile_id/role",
            put(assign_role_handler::<R>),
        )
        .route(
            "/api/v1/profiles/:profile_id/activate",
            post(activate_handler::<R>),
        )
        .route("/api/v1/completion", post(completion_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct RoleAssignmentRequest {
    pub role_id: String,
    pub approver_role_id: String,
}

fn error_response(error: ProfileServiceError) -> Response {
    let status = match &error {
        ProfileServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ProfileServiceError::Repository(RepositoryError::Conflict)
        | ProfileServiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
        ProfileServiceError::UnknownRole { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ProfileServiceError::NotAuthorized { .. } => StatusCode::FORBIDDEN,
        ProfileServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Json(registration): Json<ProfileRegistration>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.register(registration) {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn show_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.get(&ProfileId(profile_id)) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.update(&ProfileId(profile_id), patch) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assign_role_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
    Json(request): Json<RoleAssignmentRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let id = ProfileId(profile_id);
    match service.assign_role(&id, &request.role_id, &request.approver_role_id) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn activate_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.activate(&ProfileId(profile_id)) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Scores any JSON object keyed by profile field names.
pub(crate) async fn completion_handler(Json(fields): Json<Map<String, Value>>) -> Response {
    (StatusCode::OK, Json(completion_report(&fields))).into_response()
}
