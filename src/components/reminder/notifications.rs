use super::models::ReminderOutput;
use super::subject::parse_subject;
use crate::components::outlook::OutlookClient;
use crate::config::Config;
use crate::error::AppResult;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// One reminder ready for delivery
#[derive(Debug, Clone, Serialize)]
pub struct PreparedReminder {
    pub calendar: String,
    pub subject: String,
    pub reminder: ReminderOutput,
    /// Accepted by the mail gateway
    pub delivered: bool,
}

/// Outcome of a reminder run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReminderSummary {
    pub reminders: Vec<PreparedReminder>,
    /// Events without a recognised reminder code
    pub skipped: usize,
    /// Events whose subject could not be turned into a reminder or whose
    /// reminder could not be sent
    pub failed: usize,
    pub sent: usize,
}

/// Format reminders for every event tomorrow and send them when enabled
pub async fn send_tomorrow_reminders(
    client: &OutlookClient,
    config: &Config,
) -> AppResult<ReminderSummary> {
    let day = crate::utils::time::tomorrow(Utc::now(), config.local_timezone()?)?;
    send_reminders_for_day(client, config, day).await
}

/// Format reminders for every event on `day` and send them when enabled
pub async fn send_reminders_for_day(
    client: &OutlookClient,
    config: &Config,
    day: NaiveDate,
) -> AppResult<ReminderSummary> {
    let token = &config.access_token;
    let email = &config.user_email;

    let calendars = client.list_calendars(token, email).await?;
    info!("Found {} calendar(s)", calendars.len());

    let events_by_calendar = client
        .get_events_by_calendars_for_day(token, email, &calendars, day)
        .await?;

    let mut summary = ReminderSummary::default();
    for (calendar, events) in events_by_calendar {
        for event in events {
            let reminder = match parse_subject(&event) {
                Ok(reminder) => reminder,
                Err(e) => {
                    warn!("Skipping '{}' in '{}': {}", event.subject, calendar, e);
                    summary.failed += 1;
                    continue;
                }
            };

            if reminder.is_empty() {
                summary.skipped += 1;
                continue;
            }

            let phone = reminder.phone.clone().unwrap_or_default();
            let mut delivered = false;
            if config.send_reminders {
                let sent = client
                    .send_email(
                        token,
                        email,
                        &reminder.event_type,
                        &reminder.event_template,
                        &phone,
                    )
                    .await;
                match sent {
                    Ok(Some(_)) => {
                        delivered = true;
                        summary.sent += 1;
                        info!("Sent {} to {}", reminder.event_type, phone);
                    }
                    Ok(None) => {
                        warn!("No phone number for '{}' in '{}'", event.subject, calendar);
                    }
                    Err(e) => {
                        warn!("Failed to send '{}' in '{}': {}", event.subject, calendar, e);
                        summary.failed += 1;
                    }
                }
            } else {
                info!(
                    "[dry run] {} to {}: {}",
                    reminder.event_type, phone, reminder.event_template
                );
            }

            summary.reminders.push(PreparedReminder {
                calendar: calendar.clone(),
                subject: event.subject,
                reminder,
                delivered,
            });
        }
    }

    Ok(summary)
}
