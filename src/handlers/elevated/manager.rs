use axum::{
    extract::{Path, State},
    Extension,
};
use serde::Serialize;

use crate::database::models::{LeaveRequest, LeaveStatus, PendingTimesheet};
use crate::database::repository::{LeaveRepository, TimesheetRepository};
use crate::handlers::utils::parse_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDecision {
    pub timesheet_entry_id: i32,
    pub approved: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecision {
    pub leaveentryid: i32,
    pub approval_status: LeaveStatus,
}

/// GET /api/manager/timesheets - unapproved entries from direct reports
pub async fn pending_timesheets(
    State(state): State<AppState>,
    Extension(manager): Extension<AuthUser>,
) -> ApiResult<Vec<PendingTimesheet>> {
    let rows = TimesheetRepository::new(state.db.pool().clone())
        .pending_for_manager(manager.userid)
        .await?;
    Ok(ApiResponse::success(rows))
}

async fn decide_timesheet(state: AppState, manager: AuthUser, raw_id: &str, approved: bool) -> ApiResult<TimesheetDecision> {
    let entry_id = parse_id(raw_id, "timesheetentryid")?;

    TimesheetRepository::new(state.db.pool().clone())
        .set_approved(manager.userid, entry_id, approved)
        .await?;

    tracing::info!("Manager {} set timesheet {} approved={}", manager.userid, entry_id, approved);
    Ok(ApiResponse::success(TimesheetDecision {
        timesheet_entry_id: entry_id,
        approved,
    }))
}

/// POST /api/manager/timesheets/:id/approve
pub async fn approve_timesheet(
    State(state): State<AppState>,
    Extension(manager): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<TimesheetDecision> {
    decide_timesheet(state, manager, &raw_id, true).await
}

/// POST /api/manager/timesheets/:id/reject
pub async fn reject_timesheet(
    State(state): State<AppState>,
    Extension(manager): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<TimesheetDecision> {
    decide_timesheet(state, manager, &raw_id, false).await
}

/// GET /api/manager/annual-leave - leave awaiting a decision
pub async fn pending_leave(
    State(state): State<AppState>,
    Extension(manager): Extension<AuthUser>,
) -> ApiResult<Vec<LeaveRequest>> {
    let rows = LeaveRepository::new(state.db.pool().clone())
        .pending_for_manager(manager.userid)
        .await?;
    Ok(ApiResponse::success(rows))
}

async fn decide_leave(state: AppState, manager: AuthUser, raw_id: &str, status: LeaveStatus) -> ApiResult<LeaveDecision> {
    let entry_id = parse_id(raw_id, "leaveentryid")?;

    LeaveRepository::new(state.db.pool().clone())
        .set_status(manager.userid, entry_id, status)
        .await?;

    tracing::info!("Manager {} set leave {} to {}", manager.userid, entry_id, status.as_str());
    Ok(ApiResponse::success(LeaveDecision {
        leaveentryid: entry_id,
        approval_status: status,
    }))
}

/// POST /api/manager/annual-leave/:id/approve
pub async fn approve_leave(
    State(state): State<AppState>,
    Extension(manager): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<LeaveDecision> {
    decide_leave(state, manager, &raw_id, LeaveStatus::Approved).await
}

/// POST /api/manager/annual-leave/:id/reject
pub async fn reject_leave(
    State(state): State<AppState>,
    Extension(manager): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<LeaveDecision> {
    decide_leave(state, manager, &raw_id, LeaveStatus::Rejected).await
}
