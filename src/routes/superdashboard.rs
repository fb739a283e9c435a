use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{dto::user_dto::UsersResponse, error::Error, AppState};

#[utoipa::path(
    get,
    path = "/api/superdashboard/users",
    responses(
        (status = 200, description = "All platform users", body = Json<UsersResponse>),
        (status = 404, description = "No users found"),
        (status = 500, description = "Failed to fetch users")
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Response {
    // Clients get one of three stable shapes; internal errors are logged
    // here and never serialized.
    match state.directory_service.list_platform_users().await {
        Ok(users) => Json(UsersResponse { users }).into_response(),
        Err(Error::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No users found" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = ?err, "failed to fetch platform users");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to fetch users" })),
            )
                .into_response()
        }
    }
}
