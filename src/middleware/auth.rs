use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::auth::{Claims, SessionError, SESSION_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub userid: i32,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { userid: claims.userid }
    }
}

/// Session middleware: validates the token and injects `AuthUser`
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.sessions.is_configured() {
        tracing::error!("Rejecting request to {}: JWT secret not configured", request.uri().path());
        return Err(ApiError::internal_server_error("Missing JWT_SECRET configuration"));
    }

    let token = extract_token(&headers).ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

    let claims = state.sessions.verify(&token).map_err(|e| {
        tracing::warn!("Session rejected for {}: {}", request.uri().path(), e);
        match e {
            SessionError::MissingSecret => ApiError::internal_server_error("Missing JWT_SECRET configuration"),
            _ => ApiError::unauthorized("Invalid or expired token"),
        }
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Bearer header first, then the session cookie
fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
