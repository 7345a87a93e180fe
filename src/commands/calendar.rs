use super::print_json;
use tracing::info;
use vla_reminders::components::reminder::send_tomorrow_reminders;
use vla_reminders::components::OutlookClient;
use vla_reminders::config::Config;
use vla_reminders::error::AppResult;

/// Format and optionally send tomorrow's reminders
pub async fn remind(config: &Config) -> AppResult<()> {
    let client = OutlookClient::new(config)?;
    let summary = send_tomorrow_reminders(&client, config).await?;
    info!(
        "{} reminder(s) prepared, {} sent, {} skipped, {} failed",
        summary.reminders.len(),
        summary.sent,
        summary.skipped,
        summary.failed
    );
    print_json(&summary)
}

/// List calendars
pub async fn calendars(config: &Config) -> AppResult<()> {
    let client = OutlookClient::new(config)?;
    let calendars = client.list_calendars(&config.access_token, &config.user_email).await?;
    print_json(&calendars)
}

/// Tomorrow's events by calendar
pub async fn tomorrow(config: &Config) -> AppResult<()> {
    let client = OutlookClient::new(config)?;
    let calendars = client.list_calendars(&config.access_token, &config.user_email).await?;
    let events = client
        .get_events_by_calendars(&config.access_token, &config.user_email, &calendars)
        .await?;
    print_json(&events)
}

/// Upcoming events
pub async fn events(config: &Config) -> AppResult<()> {
    let client = OutlookClient::new(config)?;
    let events = client.get_events(&config.access_token, &config.user_email).await?;
    print_json(&events)
}
