use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::database::repository::TimesheetRepository;
use crate::services::{AllocationResult, AllocationService};

pub async fn handle(user_id: i32, week: Option<&str>, output_format: OutputFormat) -> anyhow::Result<()> {
    let (_, db) = connect_from_env()?;
    let service = AllocationService::new(TimesheetRepository::new(db.pool().clone()));
    let result = service.weekly_allocation(user_id, week).await?;
    db.close().await;

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_table(&result),
    }
    Ok(())
}

fn print_table(result: &AllocationResult) {
    if result.entries.is_empty() {
        println!("No timesheet entries for this week");
        return;
    }

    println!("{:<20} {:>8}", "BOOKING CODE", "HOURS");
    println!("{}", "-".repeat(29));
    for (code, hours) in &result.breakdown {
        println!("{:<20} {:>8}", code, format_hours(*hours));
    }
    println!("{}", "-".repeat(29));
    println!("{:<20} {:>8}", "TOTAL", format_hours(result.total_hours));
}
