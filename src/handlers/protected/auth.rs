use axum::{extract::State, Extension};

use crate::database::models::Account;
use crate::database::repository::AccountRepository;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/auth/me - the account behind the current session
pub async fn me(State(state): State<AppState>, Extension(user): Extension<AuthUser>) -> ApiResult<Account> {
    let account = AccountRepository::new(state.db.pool().clone())
        .find_by_id(user.userid)
        .await?;
    Ok(ApiResponse::success(account))
}
