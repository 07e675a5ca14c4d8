use clap::Parser;
use pingping_scraper::config::{Command, OutputFormat};
use pingping_scraper::core::report;
use pingping_scraper::utils::logger;
use pingping_scraper::{
    CliConfig, LocalOutput, PingPingError, PingPingRequestService, PingPingService,
    RegexUserAgentParser, Result, TomlConfig,
};

type Service = PingPingService<PingPingRequestService<TomlConfig>, RegexUserAgentParser>;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // Logs go to stderr
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("Command: {:?}", config.command);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());

        std::process::exit(e.severity().exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    let settings = config.settings()?;
    tracing::debug!("Using site: {}", settings.site.base_url);

    let request = PingPingRequestService::new(settings)?;
    let service: Service = PingPingService::new(request, RegexUserAgentParser::new());
    let output = LocalOutput::new(config.output.clone());

    if config.format == OutputFormat::Csv
        && !matches!(
            config.command,
            Command::Transactions { .. } | Command::RecentTransactions
        )
    {
        return Err(PingPingError::validation(
            "CSV output is only available for transactions.",
        ));
    }

    let rendered = match &config.command {
        Command::Login { username, password } => {
            let cookie = service.do_user_login(username, password).await?;
            report::to_json(&serde_json::json!({ "token": cookie }))?
        }
        Command::Logout => {
            let logged_out = service.do_user_logout(config.require_cookie()?).await?;
            if !logged_out {
                return Err(PingPingError::validation("Could not log out."));
            }
            report::to_json(&serde_json::json!({ "loggedOut": true }))?
        }
        Command::Purse => {
            let purse = service.get_user_purse(config.require_cookie()?).await?;
            report::to_json(&purse)?
        }
        Command::Transactions { from } => {
            let cookie = config.require_cookie()?;
            match (from.as_slice(), config.format) {
                ([single], OutputFormat::Csv) => {
                    let model = service.get_transactions_by_date(cookie, *single).await?;
                    report::transactions_to_csv(model.transactions())?
                }
                ([single], OutputFormat::Json) => {
                    report::to_json(&service.get_transactions_by_date(cookie, *single).await?)?
                }
                (dates, OutputFormat::Json) => {
                    report::to_json(&service.get_transactions_by_dates(cookie, dates).await?)?
                }
                (_, OutputFormat::Csv) => {
                    return Err(PingPingError::validation(
                        "CSV output takes a single --from date.",
                    ))
                }
            }
        }
        Command::RecentTransactions => {
            let model = service
                .get_recent_transactions(config.require_cookie()?)
                .await?;
            match config.format {
                OutputFormat::Csv => report::transactions_to_csv(model.transactions())?,
                OutputFormat::Json => report::to_json(&model)?,
            }
        }
        Command::Sessions => {
            let sessions = service.get_user_sessions(config.require_cookie()?).await?;
            report::to_json(&sessions)?
        }
        Command::LogoutSession { session_id } => {
            let done = service
                .logout_session(config.require_cookie()?, session_id)
                .await?;
            report::to_json(&done)?
        }
        Command::ResetPassword { username } => {
            let requested = service.reset_password(username).await?;
            report::to_json(&requested)?
        }
    };

    output.write(&rendered)?;
    tracing::info!("✅ Done");
    Ok(())
}
