use axum::extract::{Path, State};

use crate::database::models::{Employee, KeyEmployee};
use crate::database::repository::EmployeeRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const KEY_EMPLOYEE_COUNT: i64 = 5;

/// GET /api/employees/key - newest starters for the dashboard
pub async fn key_employees(State(state): State<AppState>) -> ApiResult<Vec<KeyEmployee>> {
    let employees = EmployeeRepository::new(state.db.pool().clone())
        .key_employees(KEY_EMPLOYEE_COUNT)
        .await?;
    Ok(ApiResponse::success(employees))
}

/// GET /api/employees/:userid - full directory record
pub async fn employee_information(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Employee> {
    let userid = raw_id
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::bad_request("Invalid userid parameter"))?;

    let employee = EmployeeRepository::new(state.db.pool().clone())
        .find_by_userid(userid)
        .await?;
    Ok(ApiResponse::success(employee))
}
