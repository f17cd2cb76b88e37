use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::AccountService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub userid: i32,
}

/// POST /api/admin/users - create a login account
pub async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<CreatedUser> {
    let Json(request) = payload?;

    let accounts = AccountService::new(state.db.pool().clone(), &state.config.security);
    let userid = accounts.create_user(&request.username, &request.password).await?;

    tracing::info!("User {} created account {}", user.userid, userid);
    Ok(ApiResponse::created(CreatedUser { userid }))
}
