use axum::{extract::rejection::JsonRejection, extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::auth::SESSION_COOKIE;
use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::services::AccountService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub userid: i32,
    pub token: String,
    pub expires_in: i64,
}

/// POST /auth/login - verify credentials and open a session
///
/// Expected Input:
/// ```json
/// { "username": "jsmith", "password": "..." }
/// ```
///
/// On success the token is returned in the body and set as an HTTP-only
/// `token` cookie; either may be presented to the `/api` routes.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiResponse<LoginResponse>), ApiError> {
    let Json(request) = payload?;

    let accounts = AccountService::new(state.db.pool().clone(), &state.config.security);
    let userid = accounts.authenticate(&request.username, &request.password).await?;

    let token = state.sessions.issue(userid)?;
    let expires_in = state.sessions.expires_in();

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .http_only(true)
        .secure(state.config.security.secure_cookies)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(expires_in))
        .build();

    Ok((
        jar.add(cookie),
        ApiResponse::success(LoginResponse {
            userid,
            token,
            expires_in,
        }),
    ))
}

/// POST /auth/logout - drop the session cookie
pub async fn logout(jar: CookieJar) -> (CookieJar, ApiResponse<serde_json::Value>) {
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), ApiResponse::success(serde_json::json!({ "loggedOut": true })))
}
