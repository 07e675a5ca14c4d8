use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PingPingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.pingping.be/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_COOKIE_NAME: &str = "__Secure-myNetpay";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestConfig {
    /// No timeout beyond the client default when absent.
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PingPingError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces environment variable references such as ${PINGPING_URL}
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| PingPingError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    fn user_agent(&self) -> &str {
        &self.site.user_agent
    }

    fn cookie_name(&self) -> &str {
        &self.site.cookie_name
    }

    fn timeout(&self) -> Option<Duration> {
        self.request.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("site.base_url", &self.site.base_url)?;
        validate_non_empty_string("site.user_agent", &self.site.user_agent)?;
        validate_non_empty_string("site.cookie_name", &self.site.cookie_name)?;

        if let Some(timeout) = self.request.timeout_seconds {
            validate_positive_number("request.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
