use crate::utils::error::{PingPingError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PingPingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PingPingError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PingPingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PingPingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PingPingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects blank request arguments with the message the caller will see.
pub fn require_non_blank(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PingPingError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("site.base_url", "https://example.com").is_ok());
        assert!(validate_url("site.base_url", "http://example.com").is_ok());
        assert!(validate_url("site.base_url", "").is_err());
        assert!(validate_url("site.base_url", "invalid-url").is_err());
        assert!(validate_url("site.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("request.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("cookie=abc", "Cookie is empty.").is_ok());
        let err = require_non_blank("  ", "Cookie is empty.").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Cookie is empty.");
    }
}
