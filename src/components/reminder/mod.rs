//! Reminder text built from calendar event subjects.
//!
//! Subjects follow `CODE - field, field, ..., phone`; the code selects one
//! of the fixed message templates.

pub mod models;
pub mod notifications;
mod subject;
mod templates;
mod time;

pub use models::{DateTimeParts, ReminderKind, ReminderOutput};
pub use notifications::{
    send_reminders_for_day, send_tomorrow_reminders, PreparedReminder, ReminderSummary,
};
pub use subject::parse_subject;
pub use time::parse_outlook_date;
