// handlers/elevated/mod.rs - Manager-scoped handlers
//
// Same session requirement as the protected tier. The authenticated user acts
// as a manager: every query joins employeedetails on managerid, so rows of
// anyone who does not report to the caller are invisible (404 on mutation).

pub mod manager;
