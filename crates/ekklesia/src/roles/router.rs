use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::hierarchy::RoleHierarchy;
use super::role::Role;

/// Read-only endpoints over a role hierarchy.
pub fn role_router(hierarchy: RoleHierarchy<'static>) -> Router {
    Router::new()
        .route("/api/v1/roles", get(list_handler))
        .route("/api/v1/roles/sorted", get(sorted_handler))
        .route("/api/v1/roles/:role_id", get(show_handler))
        .route("/api/v1/roles/:role_id/approvable", get(approvable_handler))
        .route(
            "/api/v1/roles/:role_id/permissions/:permission",
            get(permission_handler),
        )
        .with_state(hierarchy)
}

#[derive(Debug, Serialize)]
pub struct PermissionCheckView {
    pub role_id: String,
    pub permission: String,
    pub granted: bool,
}

pub(crate) async fn list_handler(
    State(hierarchy): State<RoleHierarchy<'static>>,
) -> Json<&'static [Role]> {
    Json(hierarchy.roles())
}

pub(crate) async fn sorted_handler(
    State(hierarchy): State<RoleHierarchy<'static>>,
) -> Json<Vec<&'static Role>> {
    Json(hierarchy.sorted())
}

pub(crate) async fn show_handler(
    State(hierarchy): State<RoleHierarchy<'static>>,
    Path(role_id): Path<String>,
) -> Response {
    match hierarchy.role(&role_id) {
        Some(role) => (StatusCode::OK, Json(role)).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown role '{role_id}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn approvable_handler(
    State(hierarchy): State<RoleHierarchy<'static>>,
    Path(role_id): Path<String>,
) -> Json<Vec<&'static Role>> {
    Json(hierarchy.approvable(&role_id))
}

pub(crate) async fn permission_handler(
    State(hierarchy): State<RoleHierarchy<'static>>,
    Path((role_id, permission)): Path<(String, String)>,
) -> Json<PermissionCheckView> {
    let granted = hierarchy.has_permission(&role_id, &permission);
    Json(PermissionCheckView {
        role_id,
        permission,
        granted,
    })
}
