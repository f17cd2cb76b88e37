use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One logged block of time against a booking code.
///
/// Start and end are kept as the text the store returned; the allocation
/// report decides what counts as a usable time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    #[sqlx(rename = "bookingcode")]
    pub booking_code: String,
    pub date: NaiveDate,
    #[sqlx(rename = "starttime")]
    pub start_time: String,
    #[sqlx(rename = "endtime")]
    pub end_time: String,
    pub approved: bool,
}

/// Unapproved entry as listed for a manager
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PendingTimesheet {
    #[sqlx(rename = "timesheetentryid")]
    pub timesheet_entry_id: i32,
    pub userid: i32,
    #[sqlx(rename = "bookingcode")]
    pub booking_code: String,
    pub date: NaiveDate,
    #[sqlx(rename = "starttime")]
    pub start_time: String,
    #[sqlx(rename = "endtime")]
    pub end_time: String,
}

/// Validated submission row ready for insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimesheetEntry {
    pub booking_code: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
