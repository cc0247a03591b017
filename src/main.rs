mod commands;
mod config;
mod google;
mod timetable;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "classcal")]
#[command(about = "Sync your university day-order timetable into Google Calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the upcoming day orders and rewrite the calendar to match
    Sync,
    /// Show what a sync would do without changing the calendar
    Status,
    /// Print the upcoming day orders
    Orders,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync => commands::sync::run().await,
        Commands::Status => commands::status::run().await,
        Commands::Orders => commands::orders::run().await,
    }
}
