use anyhow::Context;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::DatabaseManager;

/// Open the pool described by the environment (DATABASE_URL, ...)
pub fn connect_from_env() -> anyhow::Result<(AppConfig, DatabaseManager)> {
    let config = AppConfig::from_env();
    let db = DatabaseManager::connect_lazy(&config.database).context("cannot open database pool")?;
    Ok((config, db))
}

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(fields)) = data {
                if let Some(object) = response.as_object_mut() {
                    object.extend(fields);
                }
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Format fractional hours for tables ("7.50")
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
