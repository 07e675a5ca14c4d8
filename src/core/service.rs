use crate::domain::model::{
    DatedTransactionsModel, DatedTransactionsModelList, PurseModel, SessionsModelList,
};
use crate::domain::ports::RequestService;
use crate::parser::{self, UserAgentParser};
use crate::utils::error::{PingPingError, Result};
use crate::utils::validation::require_non_blank;
use chrono::{Local, Months, NaiveDate, NaiveTime};

const EMPTY_COOKIE: &str = "Cookie is empty.";

/// One method per account operation: fetch the page through the request
/// service, then hand it to the parser.
pub struct PingPingService<R: RequestService, U: UserAgentParser> {
    request: R,
    agent_parser: U,
}

/// Start of the "recent transactions" window: one calendar month before
/// `today`.
pub fn recent_start(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN)
}

impl<R: RequestService, U: UserAgentParser> PingPingService<R, U> {
    pub fn new(request: R, agent_parser: U) -> Self {
        Self {
            request,
            agent_parser,
        }
    }

    /// Logs in and returns the authentication cookie.
    pub async fn do_user_login(&self, user_name: &str, password: &str) -> Result<String> {
        require_non_blank(user_name, "Username or password is empty.")?;
        require_non_blank(password, "Username or password is empty.")?;

        let login = self.request.login_user(user_name, password).await?;

        if !parser::login_was_valid(&login.page) {
            tracing::info!("Login rejected by the site");
            return Err(PingPingError::LoginRejected);
        }

        match login.cookie {
            Some(cookie) if !cookie.trim().is_empty() => {
                tracing::info!("Login succeeded");
                Ok(cookie)
            }
            _ => Err(PingPingError::MissingCookie),
        }
    }

    pub async fn do_user_logout(&self, cookie: &str) -> Result<bool> {
        require_non_blank(cookie, EMPTY_COOKIE)?;
        self.request.log_out_user(cookie).await
    }

    pub async fn get_user_purse(&self, cookie: &str) -> Result<PurseModel> {
        require_non_blank(cookie, EMPTY_COOKIE)?;

        let response = self.request.get_user_purse(cookie).await?;
        let purse = parser::parse_user_purse(&response.page)?;

        if purse.user_name.is_empty() {
            return Err(PingPingError::PurseUnavailable);
        }
        Ok(purse)
    }

    pub async fn get_recent_transactions(&self, cookie: &str) -> Result<DatedTransactionsModel> {
        let from = recent_start(Local::now().date_naive());
        self.get_transactions_by_date(cookie, from).await
    }

    pub async fn get_transactions_by_date(
        &self,
        cookie: &str,
        from: NaiveDate,
    ) -> Result<DatedTransactionsModel> {
        require_non_blank(cookie, EMPTY_COOKIE)?;

        let response = self.request.get_transactions_by_date(cookie, from).await?;
        let model =
            parser::parse_transactions_by_date(&response.page, from.and_time(NaiveTime::MIN))?;

        tracing::info!(
            "Parsed {} transactions since {}",
            model.transactions().len(),
            from
        );
        Ok(model)
    }

    /// Runs one dated query per start date, one request at a time.
    pub async fn get_transactions_by_dates(
        &self,
        cookie: &str,
        dates: &[NaiveDate],
    ) -> Result<DatedTransactionsModelList> {
        let mut dated = Vec::with_capacity(dates.len());
        for from in dates {
            dated.push(self.get_transactions_by_date(cookie, *from).await?);
        }

        let mut list = DatedTransactionsModelList::default();
        list.set_dated_transactions(dated);
        Ok(list)
    }

    pub async fn get_user_sessions(&self, cookie: &str) -> Result<SessionsModelList> {
        require_non_blank(cookie, EMPTY_COOKIE)?;

        let response = self.request.get_all_current_sessions(cookie).await?;
        let sessions = parser::parse_user_sessions(&response.page, &self.agent_parser)?;

        tracing::info!("Parsed {} sessions", sessions.sessions.len());
        Ok(sessions)
    }

    pub async fn logout_session(&self, cookie: &str, session_id: &str) -> Result<bool> {
        require_non_blank(cookie, "Cookie or session ID is empty.")?;
        require_non_blank(session_id, "Cookie or session ID is empty.")?;
        self.request.logout_session(cookie, session_id).await
    }

    pub async fn reset_password(&self, user_name: &str) -> Result<bool> {
        require_non_blank(user_name, "Username is empty.")?;
        self.request.reset_password(user_name).await
    }
}
