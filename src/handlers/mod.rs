// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no session) → Protected (session required) → Elevated (manager-scoped)
pub mod public;    // Tier 1: No authentication required (/, /health, /auth/*)
pub mod protected; // Tier 2: Session required (/api/*)
pub mod elevated;  // Tier 3: Session required, rows limited to direct reports (/api/manager/*)

mod utils;

/*
Directory structure:
src/
├── handlers/
│   ├── mod.rs            ← This file
│   ├── utils.rs          ← Path/query parsing shared by handlers
│   ├── public/
│   │   ├── system.rs     ← GET /, GET /health
│   │   └── auth.rs       ← POST /auth/login, POST /auth/logout
│   ├── protected/
│   │   ├── auth.rs       ← GET /api/auth/me
│   │   ├── admin.rs      ← POST /api/admin/users
│   │   ├── employees.rs  ← GET /api/employees/key, /api/employees/:userid
│   │   ├── timesheet.rs  ← /api/timesheet/{submit,recent,allocation}
│   │   └── annual_leave.rs ← /api/annual-leave[/request|/cancel|/status]
│   └── elevated/
│       └── manager.rs    ← /api/manager/{timesheets,annual-leave}
│
└── routes.rs             ← Router assembly and middleware
*/
