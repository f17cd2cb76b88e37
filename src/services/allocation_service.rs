//! Weekly time allocation.
//!
//! Buckets a user's timesheet rows for one Monday–Sunday week by booking
//! code and sums the elapsed hours of each row.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::TimesheetEntry;

/// Read access to stored timesheet rows
#[async_trait]
pub trait TimesheetStore: Send + Sync {
    /// Rows owned by `userid` whose date lies in `[from, to]`
    async fn timesheets_in_range(
        &self,
        userid: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TimesheetEntry>, DatabaseError>;
}

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Invalid date format: {0}")]
    InvalidInput(String),

    #[error("Timesheet store failed: {0}")]
    UpstreamFailure(#[from] DatabaseError),
}

/// The closed interval `[monday 00:00:00, sunday 23:59:59]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeekWindow {
    /// Week containing `reference`; Monday is always day one.
    /// `None` when the week runs past the representable calendar.
    pub fn containing(reference: NaiveDate) -> Option<Self> {
        // 0 = Sunday .. 6 = Saturday
        let weekday = reference.weekday().num_days_from_sunday() as u64;
        let monday = reference.checked_sub_days(Days::new((weekday + 6) % 7))?;
        let sunday = monday.checked_add_days(Days::new(6))?;
        Some(Self { monday, sunday })
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.monday.and_time(NaiveTime::MIN)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.sunday.and_hms_opt(23, 59, 59).unwrap_or_else(|| self.sunday.and_time(NaiveTime::MIN))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub total_hours: f64,
    pub breakdown: BTreeMap<String, f64>,
    pub entries: Vec<TimesheetEntry>,
}

#[cfg(test)]
impl AllocationResult {
    pub fn empty() -> Self {
        Self {
            total_hours: 0.0,
            breakdown: BTreeMap::new(),
            entries: Vec::new(),
        }
    }
}

/// Parse the `week` reference. Accepts a calendar date, an RFC 3339
/// timestamp (date taken in its own offset) or a naive date-time.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, AllocationError> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(ts.date());
        }
    }

    Err(AllocationError::InvalidInput(raw.to_string()))
}

fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let value = raw.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Elapsed hours between the entry's start and end times of day.
///
/// `None` when either time cannot be read. End before start is negative;
/// there is no wrap past midnight.
pub fn entry_hours(entry: &TimesheetEntry) -> Option<f64> {
    let start = parse_time_of_day(&entry.start_time)?;
    let end = parse_time_of_day(&entry.end_time)?;
    let hours = (end - start).num_milliseconds() as f64 / 3_600_000.0;
    hours.is_finite().then_some(hours)
}

/// Reduce fetched rows to totals. Every row is kept in `entries`, including
/// those skipped for unreadable times.
pub fn aggregate(entries: Vec<TimesheetEntry>) -> AllocationResult {
    let mut total_hours = 0.0;
    let mut breakdown: BTreeMap<String, f64> = BTreeMap::new();

    for entry in &entries {
        match entry_hours(entry) {
            Some(hours) => {
                *breakdown.entry(entry.booking_code.clone()).or_insert(0.0) += hours;
                total_hours += hours;
            }
            None => debug!(
                "Skipping timesheet row {} on {} with unreadable times ({:?} - {:?})",
                entry.booking_code, entry.date, entry.start_time, entry.end_time
            ),
        }
    }

    AllocationResult {
        total_hours,
        breakdown,
        entries,
    }
}

pub struct AllocationService<S> {
    store: S,
}

impl<S: TimesheetStore> AllocationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Allocation for the week named by `week`, or the current local week
    /// when it is absent or blank.
    pub async fn weekly_allocation(&self, userid: i32, week: Option<&str>) -> Result<AllocationResult, AllocationError> {
        let reference = match week.map(str::trim).filter(|w| !w.is_empty()) {
            Some(raw) => parse_reference_date(raw)?,
            None => Local::now().date_naive(),
        };
        self.allocation_for(userid, reference).await
    }

    pub async fn allocation_for(&self, userid: i32, reference: NaiveDate) -> Result<AllocationResult, AllocationError> {
        let window = WeekWindow::containing(reference)
            .ok_or_else(|| AllocationError::InvalidInput(format!("{} is outside the supported date range", reference)))?;
        let mut entries = self
            .store
            .timesheets_in_range(userid, window.monday, window.sunday)
            .await?;
        entries.retain(|entry| window.contains(entry.date));
        debug!(
            "Aggregating {} timesheet rows for user {} between {} and {}",
            entries.len(),
            userid,
            window.starts_at(),
            window.ends_at()
        );
        Ok(aggregate(entries))
    }
}
