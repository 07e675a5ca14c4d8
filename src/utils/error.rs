use thiserror::Error;

#[derive(Error, Debug)]
pub enum PingPingError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Login response did not carry an authentication cookie")]
    MissingCookie,

    #[error("Marker for {field} not found: {marker:?}")]
    MissingMarker { field: String, marker: String },

    #[error("Field {field} is shorter than {expected} characters: {value:?}")]
    FieldTooShort {
        field: String,
        expected: usize,
        value: String,
    },

    #[error("Incomplete transaction: expected 4 lines, found {found}")]
    IncompleteTransaction { found: usize },

    #[error("Session columns are misaligned: {message}")]
    SessionAlignment { message: String },

    #[error("Invalid date {value:?}, expected {layout}")]
    InvalidDate {
        value: String,
        layout: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Invalid amount: {value:?}")]
    InvalidAmount { value: String },

    #[error("Login was rejected by the site")]
    LoginRejected,

    #[error("Purse could not be read")]
    PurseUnavailable,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    PageFormat,
    Authentication,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PingPingError {
    pub fn missing_marker(field: &str, marker: &str) -> Self {
        Self::MissingMarker {
            field: field.to_string(),
            marker: marker.to_string(),
        }
    }

    pub fn alignment(message: impl Into<String>) -> Self {
        Self::SessionAlignment {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http(_) | Self::UnexpectedStatus { .. } => ErrorCategory::Network,
            Self::MissingMarker { .. }
            | Self::FieldTooShort { .. }
            | Self::IncompleteTransaction { .. }
            | Self::SessionAlignment { .. }
            | Self::InvalidDate { .. }
            | Self::InvalidAmount { .. } => ErrorCategory::PageFormat,
            Self::MissingCookie | Self::LoginRejected | Self::PurseUnavailable => {
                ErrorCategory::Authentication
            }
            Self::Validation { .. } | Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Input
            }
            Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Authentication => ErrorSeverity::High,
            ErrorCategory::PageFormat => ErrorSeverity::Critical,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Http(_) | Self::UnexpectedStatus { .. } => {
                "Check your network connection and try again"
            }
            Self::MissingCookie | Self::LoginRejected => "Check your username and password",
            Self::PurseUnavailable => "The cookie may have expired, log in again",
            Self::Validation { .. } => "Check the command arguments",
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "Check the configuration file and environment variables"
            }
            Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => {
                "Check file permissions and available disk space"
            }
            _ => "The site markup may have changed; the page layout is no longer recognised",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach PingPing: {}", self),
            ErrorCategory::PageFormat => format!("Could not read the page: {}", self),
            ErrorCategory::Authentication => match self {
                Self::LoginRejected | Self::MissingCookie => {
                    "Invalid username or password.".to_string()
                }
                Self::PurseUnavailable => "Could not get purse.".to_string(),
                _ => self.to_string(),
            },
            ErrorCategory::Input | ErrorCategory::System => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PingPingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_format_errors_are_critical() {
        let err = PingPingError::missing_marker("date", "<td>");
        assert_eq!(err.category(), ErrorCategory::PageFormat);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("<td>"));
    }

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = PingPingError::validation("Cookie is empty.");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.severity().exit_code(), 2);
    }

    #[test]
    fn test_exit_codes_are_never_success() {
        for severity in [
            ErrorSeverity::Low,
            ErrorSeverity::Medium,
            ErrorSeverity::High,
            ErrorSeverity::Critical,
        ] {
            assert_ne!(severity.exit_code(), 0);
        }
        assert_eq!(PingPingError::LoginRejected.severity().exit_code(), 1);
    }

    #[test]
    fn test_login_rejected_message() {
        let err = PingPingError::LoginRejected;
        assert_eq!(err.category(), ErrorCategory::Authentication);
        assert_eq!(err.user_friendly_message(), "Invalid username or password.");
    }
}
