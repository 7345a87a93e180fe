//! Outlook REST API v2.0 client.
//!
//! `OutlookClient::make_api_call` is the single request path; the endpoint
//! helpers in `api` build URLs and payloads on top of it.

mod api;
mod client;
pub mod models;

pub use client::{HttpMethod, OutlookClient};
pub use models::{Calendar, CalendarEvent, DateTimeTimeZone, Location, ODataCollection};
