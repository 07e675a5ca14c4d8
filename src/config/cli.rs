use crate::config::toml_config::TomlConfig;
use crate::utils::error::{PingPingError, Result};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "pingping")]
#[command(about = "Reads purse, transactions and sessions from a PingPing account")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides site.base_url from the configuration
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Authentication cookie returned by `login`
    #[arg(long, env = "PINGPING_COOKIE", global = true, hide_env_values = true)]
    pub cookie: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log in and print the authentication cookie
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PINGPING_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out the session behind the cookie
    Logout,
    /// Profile and balance
    Purse,
    /// Transactions from the given dates (dd-MM-yyyy) until today
    Transactions {
        #[arg(long = "from", value_parser = parse_form_date, required = true, num_args = 1..)]
        from: Vec<NaiveDate>,
    },
    /// Transactions of the last month
    RecentTransactions,
    /// Active "remember me" sessions
    Sessions,
    /// Log out one remembered session
    LogoutSession {
        #[arg(long)]
        session_id: String,
    },
    /// Request a password reset mail
    ResetPassword {
        #[arg(long)]
        username: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

fn parse_form_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, crate::parser::format::FORM_DATE_FORMAT)
        .map_err(|e| format!("expected dd-MM-yyyy: {}", e))
}

impl CliConfig {
    /// Loads the configuration file (or the defaults), applies the command
    /// line overrides and validates the result.
    pub fn settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.site.base_url = base_url.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn require_cookie(&self) -> Result<&str> {
        self.cookie
            .as_deref()
            .ok_or_else(|| PingPingError::validation("Cookie is empty."))
    }
}

/// Destination of the command result.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    path: Option<PathBuf>,
}

impl LocalOutput {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn write(&self, data: &str) -> Result<()> {
        match &self.path {
            Some(path) => write_file(path, data),
            None => {
                println!("{}", data);
                Ok(())
            }
        }
    }
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_transactions_command() {
        let config = CliConfig::try_parse_from([
            "pingping",
            "transactions",
            "--from",
            "01-02-2024",
            "--cookie",
            "__Secure-myNetpay=abc",
            "--format",
            "csv",
        ])
        .unwrap();

        match &config.command {
            Command::Transactions { from } => {
                assert_eq!(*from, vec![NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.require_cookie().unwrap(), "__Secure-myNetpay=abc");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result =
            CliConfig::try_parse_from(["pingping", "transactions", "--from", "2024-02-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_override_is_validated() {
        let config =
            CliConfig::try_parse_from(["pingping", "purse", "--base-url", "not a url"]).unwrap();
        assert!(config.settings().is_err());

        let config =
            CliConfig::try_parse_from(["pingping", "purse", "--base-url", "https://example.test/"])
                .unwrap();
        assert_eq!(config.settings().unwrap().site.base_url, "https://example.test/");
    }

    #[test]
    fn test_local_output_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("purse.json");

        LocalOutput::new(Some(path.clone())).write("{}").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
