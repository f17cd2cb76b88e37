// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service discovery, health, and token acquisition.
//
// Security Level: None
// Route Prefix: No /api prefix (e.g., /auth/*)
// Middleware: None

pub mod auth;
pub mod system;
