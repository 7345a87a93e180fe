use crate::config::Config;
use crate::error::{config_error, AppResult, Error};
use crate::utils::guid::make_guid;
use chrono_tz::Tz;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// HTTP verbs the Outlook API is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether the payload is sent as a JSON body
    pub fn sends_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(config_error(&format!("Invalid HTTP method: {}", s))),
        }
    }
}

/// Client for the Outlook REST API
#[derive(Debug, Clone)]
pub struct OutlookClient {
    pub(super) client: Client,
    pub(super) base_url: String,
    pub(super) user_agent: String,
    pub(super) outlook_timezone: String,
    pub(super) timezone: Tz,
    pub(super) sms_domain: String,
}

impl OutlookClient {
    /// Create a client from the run configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let timezone = config.local_timezone()?;

        let mut builder = Client::builder();
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for Outlook API calls");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            outlook_timezone: config.outlook_timezone.clone(),
            timezone,
            sms_domain: config.sms_domain.clone(),
        })
    }

    /// API base URL the endpoint helpers build on
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one authenticated request and return the decoded JSON body.
    ///
    /// Status codes of 400 and above become [`Error::HttpStatus`] and the body
    /// is dropped. An empty success body decodes to `Value::Null`.
    pub async fn make_api_call(
        &self,
        access_token: &str,
        user_email: &str,
        method: HttpMethod,
        url: &str,
        payload: Option<&str>,
    ) -> AppResult<Value> {
        let mut request = self
            .client
            .request(method.as_reqwest(), url)
            .header(USER_AGENT, &self.user_agent)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .header(ACCEPT, "application/json")
            .header("client-request-id", make_guid())
            .header("return-client-request-id", "true")
            .header("Prefer", format!("outlook.timezone=\"{}\"", self.outlook_timezone));

        if !user_email.is_empty() {
            request = request.header("X-AnchorMailbox", user_email);
        }

        if method.sends_body() {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload.unwrap_or_default().to_string());
        } else if payload.is_some() {
            debug!("Ignoring payload for {} request", method);
        }

        debug!("Doing {} {}", method, url);
        let response = request.send().await.map_err(|e| {
            let err = Error::from(e);
            warn!("Transport error: {}", err);
            err
        })?;

        let status = response.status();
        debug!("Request returned status {}", status.as_u16());
        if status.as_u16() >= 400 {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
