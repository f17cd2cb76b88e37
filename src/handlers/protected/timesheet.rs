use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::database::models::NewTimesheetEntry;
use crate::database::repository::TimesheetRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{AllocationResult, AllocationService};
use crate::state::AppState;

const RECENT_CODE_COUNT: i64 = 3;

/// One row from the timesheet form; every field may be blank
#[derive(Debug, Deserialize)]
pub struct SubmittedEntry {
    pub code: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub entries: Vec<SubmittedEntry>,
}

#[derive(Debug, Serialize)]
pub struct SubmitSummary {
    pub submitted: u64,
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCodes {
    pub recent_codes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AllocationQuery {
    pub week: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Split submitted rows into insertable entries, dropping incomplete rows.
/// Rows that are complete but unreadable fail the whole request.
pub(crate) fn validate_entries(entries: &[SubmittedEntry]) -> Result<(Vec<NewTimesheetEntry>, usize), ApiError> {
    let mut valid = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    let mut field_errors = BTreeMap::new();

    for (i, entry) in entries.iter().enumerate() {
        let (Some(code), Some(date), Some(start), Some(end)) = (
            present(&entry.code),
            present(&entry.date),
            present(&entry.start),
            present(&entry.end),
        ) else {
            tracing::debug!("Skipping incomplete timesheet entry {}: {:?}", i, entry);
            skipped += 1;
            continue;
        };

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
        let start_time = parse_time(start);
        let end_time = parse_time(end);

        if date.is_none() {
            field_errors.insert(format!("entries[{}].date", i), "Expected YYYY-MM-DD".to_string());
        }
        if start_time.is_none() {
            field_errors.insert(format!("entries[{}].start", i), "Expected HH:MM or HH:MM:SS".to_string());
        }
        if end_time.is_none() {
            field_errors.insert(format!("entries[{}].end", i), "Expected HH:MM or HH:MM:SS".to_string());
        }

        if let (Some(date), Some(start_time), Some(end_time)) = (date, start_time, end_time) {
            valid.push(NewTimesheetEntry {
                booking_code: code.to_string(),
                date,
                start_time,
                end_time,
            });
        }
    }

    if !field_errors.is_empty() {
        return Err(ApiError::validation_error("Invalid timesheet entries", Some(field_errors)));
    }
    Ok((valid, skipped))
}

/// POST /api/timesheet/submit - log time against booking codes
///
/// Expected Input:
/// ```json
/// { "entries": [ { "code": "DEV", "date": "2025-07-21", "start": "09:00", "end": "17:00" } ] }
/// ```
pub async fn submit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> ApiResult<SubmitSummary> {
    let Json(request) = payload?;
    if request.entries.is_empty() {
        return Err(ApiError::bad_request("No entries provided"));
    }

    let (entries, skipped) = validate_entries(&request.entries)?;
    let submitted = if entries.is_empty() {
        0
    } else {
        TimesheetRepository::new(state.db.pool().clone())
            .insert_many(user.userid, &entries)
            .await?
    };

    tracing::info!("User {} submitted {} timesheet rows ({} skipped)", user.userid, submitted, skipped);
    Ok(ApiResponse::success(SubmitSummary { submitted, skipped }))
}

/// GET /api/timesheet/recent - booking codes for quick entry
pub async fn recent(State(state): State<AppState>, Extension(user): Extension<AuthUser>) -> ApiResult<RecentCodes> {
    let recent_codes = TimesheetRepository::new(state.db.pool().clone())
        .recent_booking_codes(user.userid, RECENT_CODE_COUNT)
        .await?;
    Ok(ApiResponse::success(RecentCodes { recent_codes }))
}

/// GET /api/timesheet/allocation?week=YYYY-MM-DD - hours per booking code
/// for the Monday–Sunday week containing `week` (default: this week)
pub async fn allocation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    query: Result<Query<AllocationQuery>, QueryRejection>,
) -> ApiResult<AllocationResult> {
    let Query(query) = query?;

    let service = AllocationService::new(TimesheetRepository::new(state.db.pool().clone()));
    let result = service.weekly_allocation(user.userid, query.week.as_deref()).await?;
    Ok(ApiResponse::success(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, date: &str, start: &str, end: &str) -> SubmittedEntry {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        SubmittedEntry {
            code: opt(code),
            date: opt(date),
            start: opt(start),
            end: opt(end),
        }
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let (valid, skipped) = validate_entries(&[
            row("DEV", "2025-07-21", "09:00", "17:00"),
            row("", "2025-07-21", "09:00", "17:00"),
            row("MEET", "2025-07-22", "  ", "11:00"),
        ])
        .unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(valid[0].booking_code, "DEV");
        assert_eq!(valid[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn malformed_rows_fail_with_field_errors() {
        let err = validate_entries(&[
            row("DEV", "2025-07-21", "09:00", "17:00"),
            row("DEV", "21/07/2025", "9am", "17:00:00"),
        ])
        .unwrap_err();

        let body = err.to_json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["entries[1].date"].is_string());
        assert!(body["field_errors"]["entries[1].start"].is_string());
        assert!(body["field_errors"].get("entries[1].end").is_none());
    }
}
