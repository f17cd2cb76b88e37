pub mod account;
pub mod annual_leave;
pub mod employee;
pub mod timesheet;

pub use account::AccountRepository;
pub use annual_leave::LeaveRepository;
pub use employee::EmployeeRepository;
pub use timesheet::TimesheetRepository;
