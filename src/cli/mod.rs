pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "staffctl")]
#[command(about = "staffctl - Operator tooling for the Staff Portal API database")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending schema migrations")]
    Migrate,

    #[command(about = "Create a login account")]
    CreateUser {
        #[arg(long, help = "Login name (must be unique)")]
        username: String,

        #[arg(long, help = "Plain-text password; stored as a bcrypt hash")]
        password: String,
    },

    #[command(about = "Print the weekly booking-code allocation for an employee")]
    Allocation {
        #[arg(long, help = "Employee userid")]
        user_id: i32,

        #[arg(long, help = "Any date inside the week (YYYY-MM-DD or RFC 3339); defaults to today")]
        week: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::CreateUser { username, password } => {
            commands::user::create(&username, &password, output_format).await
        }
        Commands::Allocation { user_id, week } => {
            commands::allocation::handle(user_id, week.as_deref(), output_format).await
        }
    }
}
