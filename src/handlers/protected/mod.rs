// handlers/protected/mod.rs - Protected handlers (session required)
//
// Security Level: Valid session token (Bearer header or `token` cookie)
// Route Prefix: /api/*
// Middleware: jwt_auth_middleware injects `AuthUser`; handlers only ever act
// on the authenticated user's own rows.

pub mod admin;
pub mod annual_leave;
pub mod auth;
pub mod employees;
pub mod timesheet;
