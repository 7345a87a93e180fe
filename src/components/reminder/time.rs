use super::models::DateTimeParts;
use crate::error::{date_time_error, AppResult};
use chrono::{NaiveDate, NaiveTime};

/// Format an Outlook `DateTime` (`2016-09-16T09:30:00.0000000`) for reminder text.
///
/// The wall-clock values are used as they are; no timezone conversion.
pub fn parse_outlook_date(outlook_date: &str) -> AppResult<DateTimeParts> {
    let (date_part, time_part) = outlook_date
        .split_once('T')
        .ok_or_else(|| date_time_error(&format!("No time component in '{}'", outlook_date)))?;

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| date_time_error(&format!("Failed to parse date '{}': {}", date_part, e)))?;

    // Fractional seconds are ignored
    let clock = time_part.split('.').next().unwrap_or(time_part);
    let time = NaiveTime::parse_from_str(clock, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .map_err(|e| date_time_error(&format!("Failed to parse time '{}': {}", clock, e)))?;

    Ok(DateTimeParts {
        date: date.format("%a, %d/%m/%Y").to_string(),
        time: time.format("%-I:%M %P").to_string(),
    })
}
