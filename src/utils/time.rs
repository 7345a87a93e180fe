use crate::error::{date_time_error, AppResult};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Date of the day after `now`, as seen on the wall clock in `tz`
pub fn tomorrow(now: DateTime<Utc>, tz: Tz) -> AppResult<NaiveDate> {
    now.with_timezone(&tz)
        .date_naive()
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| date_time_error("Date out of range"))
}

/// Start and end bounds of an Outlook calendar view covering `day`.
///
/// The bounds carry a `Z` suffix but are the plain calendar day; Outlook
/// applies the `Prefer: outlook.timezone` header when rendering results.
pub fn calendar_view_window(day: NaiveDate) -> (String, String) {
    let date = day.format("%Y-%m-%d");
    (format!("{}T00:00:00Z", date), format!("{}T23:59:00Z", date))
}
