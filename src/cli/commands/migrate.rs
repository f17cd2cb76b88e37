use crate::cli::utils::*;
use crate::cli::OutputFormat;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let (_, db) = connect_from_env()?;
    db.migrate().await?;
    db.close().await;

    output_success(&output_format, "Migrations applied", None)
}
