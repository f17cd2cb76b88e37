use serde_json::json;

use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::services::AccountService;

pub async fn create(username: &str, password: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let (config, db) = connect_from_env()?;
    let accounts = AccountService::new(db.pool().clone(), &config.security);
    let userid = accounts.create_user(username, password).await?;
    db.close().await;

    output_success(
        &output_format,
        &format!("Created user '{}' with userid {}", username.trim(), userid),
        Some(json!({ "userid": userid })),
    )
}
