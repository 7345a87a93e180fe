use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Request returned HTTP error {status}")]
    #[diagnostic(code(vla_reminders::http_status))]
    HttpStatus { status: u16 },

    #[error("{code}: {description}")]
    #[diagnostic(code(vla_reminders::transport))]
    Transport { code: u32, description: String },

    #[error("Environment error: {0}")]
    #[diagnostic(code(vla_reminders::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(vla_reminders::config))]
    Config(String),

    #[error("Outlook API returned an unexpected response: {0}")]
    #[diagnostic(code(vla_reminders::outlook))]
    UnexpectedResponse(String),

    #[error("{code} reminder is missing field '{field}' at position {index}")]
    #[diagnostic(
        code(vla_reminders::missing_event_field),
        help("event subjects look like 'CODE - field, field, phone'")
    )]
    MissingEventField {
        code: String,
        field: &'static str,
        index: usize,
    },

    #[error("Invalid event date/time: {0}")]
    #[diagnostic(code(vla_reminders::date_time))]
    InvalidDateTime(String),

    #[error(transparent)]
    #[diagnostic(code(vla_reminders::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(vla_reminders::serialization))]
    Serialization(String),
}

impl Error {
    /// Numeric error code as reported to API callers: the HTTP status for
    /// status errors, the curl-style code for transport failures.
    pub fn error_number(&self) -> Option<u32> {
        match self {
            Error::HttpStatus { status } => Some(u32::from(*status)),
            Error::Transport { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// Transport failures are numbered like curl errors so log lines stay comparable
// with the old integration.
const CURLE_URL_MALFORMAT: u32 = 3;
const CURLE_COULDNT_CONNECT: u32 = 7;
const CURLE_OPERATION_TIMEDOUT: u32 = 28;
const CURLE_TOO_MANY_REDIRECTS: u32 = 47;
const CURLE_RECV_ERROR: u32 = 56;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            CURLE_OPERATION_TIMEDOUT
        } else if err.is_connect() {
            CURLE_COULDNT_CONNECT
        } else if err.is_redirect() {
            CURLE_TOO_MANY_REDIRECTS
        } else if err.is_builder() {
            CURLE_URL_MALFORMAT
        } else {
            CURLE_RECV_ERROR
        };
        Error::Transport {
            code,
            description: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("Invalid URL: {}", err))
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create errors for response bodies we cannot interpret
pub fn outlook_error(message: &str) -> Error {
    Error::UnexpectedResponse(message.to_string())
}

/// Helper to create date/time errors
pub fn date_time_error(message: &str) -> Error {
    Error::InvalidDateTime(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = Error::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "Request returned HTTP error 404");
        assert_eq!(err.error_number(), Some(404));
    }

    #[test]
    fn test_transport_message() {
        let err = Error::Transport {
            code: 7,
            description: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "7: connection refused");
        assert_eq!(err.error_number(), Some(7));
    }

    #[test]
    fn test_other_errors_have_no_number() {
        assert_eq!(config_error("bad").error_number(), None);
        assert_eq!(
            env_error("X").to_string(),
            "Environment error: Missing environment variable: X"
        );
    }
}
