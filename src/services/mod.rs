pub mod account_service;
pub mod allocation_service;

pub use account_service::{AccountError, AccountService};
pub use allocation_service::{AllocationError, AllocationResult, AllocationService, TimesheetStore, WeekWindow};
