use crate::error::{config_error, env_error, AppResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use toml;

/// Outlook REST API v2.0 endpoint
pub const DEFAULT_API_URL: &str = "https://outlook.office.com/api/v2.0";
/// Zone Outlook should render event times in (`Prefer` header)
pub const DEFAULT_OUTLOOK_TIMEZONE: &str = "Australia/Sydney";
/// Zone used to decide which day is "tomorrow"
pub const DEFAULT_TIMEZONE: &str = "Australia/Melbourne";
/// Email-to-SMS gateway domain appended to phone numbers
pub const DEFAULT_SMS_DOMAIN: &str = "pcsms.com.au";
/// Optional file with setting overrides
pub const OVERRIDES_FILE: &str = "config/reminders.toml";

/// Main configuration structure for a reminder run
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth access token for the Outlook API
    pub access_token: String,
    /// Mailbox the calls are made for, used as routing hint
    pub user_email: String,
    /// API base URL without trailing slash
    pub api_base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Timezone Outlook reports event times in
    pub outlook_timezone: String,
    /// Local timezone for the calendar view window
    pub timezone: String,
    /// SMS gateway domain
    pub sms_domain: String,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
    /// Send reminders instead of only logging them
    pub send_reminders: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            user_email: String::new(),
            api_base_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            outlook_timezone: DEFAULT_OUTLOOK_TIMEZONE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            sms_domain: DEFAULT_SMS_DOMAIN.to_string(),
            accept_invalid_certs: false,
            send_reminders: false,
        }
    }
}

/// Settings that may be overridden from the TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub user_agent: Option<String>,
    pub outlook_timezone: Option<String>,
    pub timezone: Option<String>,
    pub sms_domain: Option<String>,
    pub accept_invalid_certs: Option<bool>,
    pub send_reminders: Option<bool>,
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn parse_bool(var: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(config_error(&format!("Invalid boolean for {}: {}", var, value))),
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;

        if Path::new(OVERRIDES_FILE).exists() {
            let content = fs::read_to_string(OVERRIDES_FILE)?;
            let overrides = toml::from_str::<ConfigOverrides>(&content)?;
            config.apply(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Build configuration from a key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup("OUTLOOK_ACCESS_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| env_error("OUTLOOK_ACCESS_TOKEN"))?;
        let user_email = lookup("OUTLOOK_USER_EMAIL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| env_error("OUTLOOK_USER_EMAIL"))?;

        let defaults = Self::default();

        let accept_invalid_certs = match lookup("OUTLOOK_ACCEPT_INVALID_CERTS") {
            Some(value) => parse_bool("OUTLOOK_ACCEPT_INVALID_CERTS", &value)?,
            None => defaults.accept_invalid_certs,
        };
        let send_reminders = match lookup("SEND_REMINDERS") {
            Some(value) => parse_bool("SEND_REMINDERS", &value)?,
            None => defaults.send_reminders,
        };

        Ok(Config {
            access_token,
            user_email,
            api_base_url: lookup("OUTLOOK_API_URL").unwrap_or(defaults.api_base_url),
            user_agent: lookup("USER_AGENT").unwrap_or(defaults.user_agent),
            outlook_timezone: lookup("OUTLOOK_TIMEZONE").unwrap_or(defaults.outlook_timezone),
            timezone: lookup("TIMEZONE").unwrap_or(defaults.timezone),
            sms_domain: lookup("SMS_GATEWAY_DOMAIN").unwrap_or(defaults.sms_domain),
            accept_invalid_certs,
            send_reminders,
        })
    }

    /// Merge file overrides on top of the current values
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = overrides.user_agent {
            self.user_agent = v;
        }
        if let Some(v) = overrides.outlook_timezone {
            self.outlook_timezone = v;
        }
        if let Some(v) = overrides.timezone {
            self.timezone = v;
        }
        if let Some(v) = overrides.sms_domain {
            self.sms_domain = v;
        }
        if let Some(v) = overrides.accept_invalid_certs {
            self.accept_invalid_certs = v;
        }
        if let Some(v) = overrides.send_reminders {
            self.send_reminders = v;
        }
    }

    /// Check values that would otherwise only fail halfway through a run
    pub fn validate(&self) -> AppResult<()> {
        self.local_timezone()?;
        self.outlook_timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.outlook_timezone)))?;
        url::Url::parse(&self.api_base_url)?;
        Ok(())
    }

    /// Parsed local timezone
    pub fn local_timezone(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.timezone)))
    }
}
