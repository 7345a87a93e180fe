mod commands;

use clap::Parser;
use commands::{Cli, Command};
use tracing::info;
use vla_reminders::startup;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting vla-reminders");

    // Load configuration
    let config = startup::load_config()?;

    commands::run(cli.command.unwrap_or(Command::Remind), config).await
}
