use super::client::{HttpMethod, OutlookClient};
use super::models::{Calendar, CalendarEvent, ODataCollection};
use crate::error::{outlook_error, AppResult};
use crate::utils::time::{calendar_view_window, tomorrow};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};
use url::Url;

impl OutlookClient {
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Display name and email address of the signed-in user
    pub async fn get_user(&self, access_token: &str) -> AppResult<Value> {
        let url = self.endpoint("/Me", &[("$select", "DisplayName,EmailAddress")])?;
        self.make_api_call(access_token, "", HttpMethod::Get, url.as_str(), None)
            .await
    }

    /// Ten most recent inbox messages, newest first
    pub async fn get_messages(&self, access_token: &str, user_email: &str) -> AppResult<Value> {
        let url = self.endpoint(
            "/Me/MailFolders/Inbox/Messages",
            &[
                ("$select", "Subject,ReceivedDateTime,From"),
                ("$orderby", "ReceivedDateTime DESC"),
                ("$top", "10"),
            ],
        )?;
        self.make_api_call(access_token, user_email, HttpMethod::Get, url.as_str(), None)
            .await
    }

    /// Up to ten events, oldest start first
    pub async fn get_events(&self, access_token: &str, user_email: &str) -> AppResult<Value> {
        let url = self.endpoint(
            "/Me/Events",
            &[
                ("$select", "Subject,Start,End, BodyPreview"),
                ("$orderby", "Start/DateTime"),
                ("$top", "10"),
            ],
        )?;
        self.make_api_call(access_token, user_email, HttpMethod::Get, url.as_str(), None)
            .await
    }

    /// All calendars of the user
    pub async fn get_calendars(&self, access_token: &str, user_email: &str) -> AppResult<Value> {
        let url = self.endpoint("/Me/Calendars", &[])?;
        self.make_api_call(access_token, user_email, HttpMethod::Get, url.as_str(), None)
            .await
    }

    /// Calendars decoded into typed entries
    pub async fn list_calendars(
        &self,
        access_token: &str,
        user_email: &str,
    ) -> AppResult<Vec<Calendar>> {
        let response = self.get_calendars(access_token, user_email).await?;
        let calendars: ODataCollection<Calendar> = serde_json::from_value(response)
            .map_err(|e| outlook_error(&format!("Calendar list: {}", e)))?;
        Ok(calendars.value)
    }

    /// Events of one calendar on the day after today (in the local timezone)
    pub async fn get_events_by_calendar_id(
        &self,
        access_token: &str,
        user_email: &str,
        calendar_id: &str,
    ) -> AppResult<Value> {
        let day = tomorrow(Utc::now(), self.timezone)?;
        self.get_events_for_day(access_token, user_email, calendar_id, day)
            .await
    }

    /// Events of one calendar on the given day
    pub async fn get_events_for_day(
        &self,
        access_token: &str,
        user_email: &str,
        calendar_id: &str,
        day: NaiveDate,
    ) -> AppResult<Value> {
        let (start, end) = calendar_view_window(day);
        let mut url = self.endpoint("/Me/Calendars", &[])?;
        url.path_segments_mut()
            .map_err(|_| outlook_error("API base URL cannot take a path"))?
            .push(calendar_id)
            .push("calendarview");
        url.query_pairs_mut()
            .append_pair("$select", "Subject,Start,Location, BodyPreview")
            .append_pair("startdatetime", &start)
            .append_pair("enddatetime", &end);

        self.make_api_call(access_token, user_email, HttpMethod::Get, url.as_str(), None)
            .await
    }

    /// Send `content` to `<recipient>@<sms domain>` without keeping a copy
    /// in Sent Items. An empty recipient is a no-op returning `None`.
    pub async fn send_email(
        &self,
        access_token: &str,
        user_email: &str,
        subject: &str,
        content: &str,
        recipient: &str,
    ) -> AppResult<Option<Value>> {
        if recipient.is_empty() {
            debug!("No recipient, skipping send");
            return Ok(None);
        }

        let to_address = format!("{}@{}", recipient, self.sms_domain);
        let payload = json!({
            "Message": {
                "Subject": subject,
                "Body": {
                    "ContentType": "Text",
                    "Content": content,
                },
                "ToRecipients": [
                    { "EmailAddress": { "Address": to_address } }
                ],
            },
            "SaveToSentItems": "false",
        });

        let url = self.endpoint("/Me/sendmail/", &[])?;
        let response = self
            .make_api_call(
                access_token,
                user_email,
                HttpMethod::Post,
                url.as_str(),
                Some(&payload.to_string()),
            )
            .await?;
        Ok(Some(response))
    }

    /// Tomorrow's events for every calendar, keyed by calendar name.
    ///
    /// Calendars are fetched one after another; the first failure aborts.
    pub async fn get_events_by_calendars(
        &self,
        access_token: &str,
        user_email: &str,
        calendars: &[Calendar],
    ) -> AppResult<BTreeMap<String, Vec<CalendarEvent>>> {
        let day = tomorrow(Utc::now(), self.timezone)?;
        self.get_events_by_calendars_for_day(access_token, user_email, calendars, day)
            .await
    }

    /// Same as [`get_events_by_calendars`](Self::get_events_by_calendars) for an explicit day
    pub async fn get_events_by_calendars_for_day(
        &self,
        access_token: &str,
        user_email: &str,
        calendars: &[Calendar],
        day: NaiveDate,
    ) -> AppResult<BTreeMap<String, Vec<CalendarEvent>>> {
        let mut result = BTreeMap::new();

        for calendar in calendars {
            let response = self
                .get_events_for_day(access_token, user_email, &calendar.id, day)
                .await?;
            let events: ODataCollection<CalendarEvent> = serde_json::from_value(response)
                .map_err(|e| {
                    outlook_error(&format!("Events of calendar '{}': {}", calendar.name, e))
                })?;

            info!("Calendar '{}' has {} event(s) on {}", calendar.name, events.value.len(), day);
            result.insert(calendar.name.clone(), events.value);
        }

        Ok(result)
    }
}
