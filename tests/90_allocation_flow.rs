mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use staff_portal_api::config::{AppConfig, Environment};
use staff_portal_api::services::AccountService;

/// Full login -> submit -> allocation round against a real database.
/// Skipped unless TEST_DATABASE_URL points at a disposable Postgres.
#[tokio::test]
async fn submitted_hours_show_up_in_weekly_allocation() -> Result<()> {
    if common::test_database_url().is_none() {
        eprintln!("TEST_DATABASE_URL not set; skipping database flow");
        return Ok(());
    }

    let server = common::TestServer::start().await?;
    server.db.migrate().await?;

    let mut security = AppConfig::for_environment(Environment::Development).security;
    security.bcrypt_cost = 4;
    let username = common::unique_username("alloc");
    let userid = AccountService::new(server.db.pool().clone(), &security)
        .create_user(&username, "s3cret")
        .await?;

    let client = reqwest::Client::builder().cookie_store(true).build()?;

    // Wrong password first
    let res = client
        .post(server.url("/auth/login"))
        .json(&json!({ "username": username, "password": "nope" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(server.url("/auth/login"))
        .json(&json!({ "username": username, "password": "s3cret" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let login: Value = res.json().await?;
    assert_eq!(login["data"]["userid"], userid);

    // Session cookie from login authenticates the rest
    let res = client
        .post(server.url("/api/timesheet/submit"))
        .json(&json!({
            "entries": [
                { "code": "DEV", "date": "2025-07-21", "start": "09:00", "end": "12:30" },
                { "code": "DEV", "date": "2025-07-22", "start": "13:00", "end": "15:00" },
                { "code": "MEET", "date": "2025-07-23", "start": "10:00", "end": "11:00" },
                { "code": "DEV", "date": "2025-07-28", "start": "09:00", "end": "17:00" },
                { "code": "", "date": "2025-07-23", "start": "10:00", "end": "11:00" }
            ]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let summary: Value = res.json().await?;
    assert_eq!(summary["data"]["submitted"], 4);
    assert_eq!(summary["data"]["skipped"], 1);

    let res = client
        .get(server.url("/api/timesheet/allocation?week=2025-07-27"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    let data = &body["data"];

    let total = data["totalHours"].as_f64().context("totalHours should be a number")?;
    assert!((total - 6.5).abs() < 1e-9, "unexpected total {}", total);
    assert_eq!(data["breakdown"]["DEV"].as_f64(), Some(5.5));
    assert_eq!(data["breakdown"]["MEET"].as_f64(), Some(1.0));
    assert_eq!(data["entries"].as_array().map(Vec::len), Some(3));

    let res = client.get(server.url("/api/timesheet/recent")).send().await?;
    let recent: Value = res.json().await?;
    let codes = recent["data"]["recentCodes"].as_array().context("recentCodes should be a list")?;
    assert!(codes.iter().any(|c| c == "DEV"));

    // Logging out clears the cookie
    client.post(server.url("/auth/logout")).send().await?;
    let res = client.get(server.url("/api/auth/me")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
