use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service name, version and endpoint map
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Staff Portal API",
            "version": version,
            "description": "Timesheets, annual leave and approvals",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "public_auth": "/auth/login, /auth/logout (public - session acquisition)",
                "auth": "/api/auth/me (protected)",
                "admin": "/api/admin/users (protected)",
                "employees": "/api/employees/key, /api/employees/:userid (protected)",
                "timesheet": "/api/timesheet/submit, /api/timesheet/recent, /api/timesheet/allocation (protected)",
                "annual_leave": "/api/annual-leave[/request|/cancel|/status] (protected)",
                "manager": "/api/manager/timesheets, /api/manager/annual-leave (manager-scoped)",
            }
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database_error": e.to_string()
                    }
                })),
            )
        }
    }
}
