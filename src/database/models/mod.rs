pub mod account;
pub mod annual_leave;
pub mod employee;
pub mod timesheet;

pub use account::{Account, AccountCredentials};
pub use annual_leave::{LeaveDay, LeaveRequest, LeaveStatus};
pub use employee::{Employee, KeyEmployee};
pub use timesheet::{NewTimesheetEntry, PendingTimesheet, TimesheetEntry};
