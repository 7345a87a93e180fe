use clap::{Parser, Subcommand};
use vla_reminders::config::Config;
use vla_reminders::error::AppResult;

// Export submodules
pub mod calendar;
pub mod util;

/// Outlook calendar reminders
///
/// Without a subcommand, tomorrow's reminders are prepared (`remind`).
#[derive(Debug, Parser)]
#[command(name = "vla-reminders", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format tomorrow's reminders and send them when SEND_REMINDERS is set
    Remind,
    /// List the user's calendars
    Calendars,
    /// Show tomorrow's events grouped by calendar
    Tomorrow,
    /// Show the next ten events
    Events,
    /// Show the ten most recent inbox messages
    Messages,
    /// Show the signed-in user
    User,
    /// Send a raw API request
    Call {
        /// GET, POST, PATCH or DELETE
        method: String,
        /// Absolute URL or a path below the API base URL
        url: String,
        /// JSON body for POST and PATCH
        payload: Option<String>,
    },
}

/// Run one command against the API
pub async fn run(command: Command, config: Config) -> miette::Result<()> {
    let result = match command {
        Command::Remind => calendar::remind(&config).await,
        Command::Calendars => calendar::calendars(&config).await,
        Command::Tomorrow => calendar::tomorrow(&config).await,
        Command::Events => calendar::events(&config).await,
        Command::Messages => util::messages(&config).await,
        Command::User => util::user(&config).await,
        Command::Call { method, url, payload } => {
            util::call(&config, &method, &url, payload.as_deref()).await
        }
    };

    if let Err(e) = &result {
        tracing::error!("Command failed: {}", e);
    }
    Ok(result?)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
