use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::models::{LeaveDay, LeaveStatus};
use crate::database::repository::LeaveRepository;
use crate::error::ApiError;
use crate::handlers::utils::{parse_month, parse_required_date};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeaveDatesRequest {
    #[serde(default)]
    pub dates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Requested {
    pub requested: usize,
}

#[derive(Debug, Serialize)]
pub struct Cancelled {
    pub deleted: u64,
}

/// Every date must be `YYYY-MM-DD`; duplicates collapse
pub(crate) fn parse_dates(raw: &[String]) -> Result<Vec<NaiveDate>, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::bad_request("No dates provided"));
    }

    let mut dates = raw
        .iter()
        .map(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d"))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ApiError::bad_request("Invalid request body: dates must be YYYY-MM-DD"))?;
    dates.sort();
    dates.dedup();
    Ok(dates)
}

/// GET /api/annual-leave?month=YYYY-MM - the caller's leave calendar for a month
pub async fn month_calendar(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Vec<LeaveDay>> {
    let Query(query) = query?;
    let (from, until) = parse_month(query.month.as_deref())?;

    let days = LeaveRepository::new(state.db.pool().clone())
        .days_between(user.userid, from, until)
        .await?;
    Ok(ApiResponse::success(days))
}

/// POST /api/annual-leave/request - book days, (re)setting them to pending approval
pub async fn request_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<LeaveDatesRequest>, JsonRejection>,
) -> ApiResult<Requested> {
    let Json(request) = payload?;
    let dates = parse_dates(&request.dates)?;

    LeaveRepository::new(state.db.pool().clone())
        .request_days(user.userid, &dates)
        .await?;

    tracing::info!("User {} requested {} day(s) of leave", user.userid, dates.len());
    Ok(ApiResponse::success(Requested { requested: dates.len() }))
}

/// POST /api/annual-leave/cancel - withdraw booked days
pub async fn cancel_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<LeaveDatesRequest>, JsonRejection>,
) -> ApiResult<Cancelled> {
    let Json(request) = payload?;
    let dates = parse_dates(&request.dates)?;

    let deleted = LeaveRepository::new(state.db.pool().clone())
        .cancel_days(user.userid, &dates)
        .await?;

    tracing::info!("User {} cancelled {} day(s) of leave", user.userid, deleted);
    Ok(ApiResponse::success(Cancelled { deleted }))
}

/// GET /api/annual-leave/status?date=YYYY-MM-DD
pub async fn day_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<LeaveDay> {
    let Query(query) = query?;
    let date = parse_required_date(query.date.as_deref(), "date")?;

    let approval_status: LeaveStatus = LeaveRepository::new(state.db.pool().clone())
        .status_on(user.userid, date)
        .await?;
    Ok(ApiResponse::success(LeaveDay { date, approval_status }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dates_are_rejected() {
        assert_eq!(parse_dates(&[]).unwrap_err().message(), "No dates provided");
    }

    #[test]
    fn any_bad_date_rejects_the_batch() {
        let raw = vec!["2025-08-04".to_string(), "next tuesday".to_string()];
        assert!(parse_dates(&raw).is_err());
    }

    #[test]
    fn dates_are_sorted_and_deduplicated() {
        let raw = vec!["2025-08-05".to_string(), "2025-08-04".to_string(), "2025-08-05".to_string()];
        let dates = parse_dates(&raw).unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()
            ]
        );
    }
}
