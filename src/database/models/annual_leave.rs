use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    PendingApproval,
    Approved,
    Rejected,
    /// No leave row exists for the day
    Unknown,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::PendingApproval => "pending_approval",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Unknown => "unknown",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "pending_approval" => LeaveStatus::PendingApproval,
            "approved" => LeaveStatus::Approved,
            "rejected" => LeaveStatus::Rejected,
            _ => LeaveStatus::Unknown,
        }
    }
}

/// A single day in a user's leave calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDay {
    pub date: NaiveDate,
    pub approval_status: LeaveStatus,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct LeaveDayRow {
    pub date: NaiveDate,
    pub approval_status: String,
}

impl From<LeaveDayRow> for LeaveDay {
    fn from(row: LeaveDayRow) -> Self {
        Self {
            date: row.date,
            approval_status: LeaveStatus::from_db(&row.approval_status),
        }
    }
}

/// Pending leave as listed for a manager
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub leaveentryid: i32,
    pub userid: i32,
    pub date: NaiveDate,
    pub description: Option<String>,
}
