use crate::domain::model::{LoginResponse, PageResponse};
use crate::domain::ports::{ConfigProvider, RequestService};
use crate::parser::format::FORM_DATE_FORMAT;
use crate::utils::error::{PingPingError, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::header::{ACCEPT, CACHE_CONTROL, COOKIE, PRAGMA, SET_COOKIE};
use reqwest::{redirect, Client, RequestBuilder, StatusCode};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
const RESET_BUTTON: &str = "Wachtwoord opnieuw instellen";

/// HTTP transport for the PingPing site.
///
/// The client keeps no cookie jar and never follows redirects: the
/// authentication cookie is passed in explicitly on every call, and the
/// logout result is read from the redirect status itself.
pub struct PingPingRequestService<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PingPingRequestService<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut builder = Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent(config.user_agent());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    fn url(&self, query: &str) -> String {
        format!("{}{}", self.config.base_url(), query)
    }

    fn authenticated(&self, builder: RequestBuilder, cookie: &str) -> RequestBuilder {
        builder
            .header(COOKIE, cookie)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
    }

    async fn fetch_page(&self, builder: RequestBuilder) -> Result<PageResponse> {
        let response = builder.send().await?;
        tracing::debug!("Page response status: {}", response.status());

        Ok(PageResponse {
            page: response.text().await?,
        })
    }

    fn auth_cookie(&self, response: &reqwest::Response) -> Option<String> {
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.contains(self.config.cookie_name()))
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_string())
    }
}

#[async_trait]
impl<C: ConfigProvider> RequestService for PingPingRequestService<C> {
    async fn login_user(&self, user_name: &str, password: &str) -> Result<LoginResponse> {
        tracing::debug!("Posting login form to: {}", self.config.base_url());

        let response = self
            .client
            .post(self.config.base_url())
            .form(&[
                ("Username", user_name),
                ("Password", password),
                ("RememberMe", "on"),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Login response status: {}", status);

        if !status.is_success() {
            return Err(PingPingError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let cookie = self.auth_cookie(&response);
        if cookie.is_none() {
            tracing::warn!(
                "Login response carried no {} cookie",
                self.config.cookie_name()
            );
        }

        Ok(LoginResponse {
            page: response.text().await?,
            cookie,
        })
    }

    async fn get_user_purse(&self, cookie: &str) -> Result<PageResponse> {
        let builder = self
            .authenticated(self.client.get(self.url("?view=profile")), cookie)
            .header(ACCEPT, ACCEPT_HTML);
        self.fetch_page(builder).await
    }

    async fn log_out_user(&self, cookie: &str) -> Result<bool> {
        let response = self
            .authenticated(self.client.get(self.url("?logout")), cookie)
            .send()
            .await?;

        tracing::debug!("Logout response status: {}", response.status());

        // The site answers a successful logout with a permanent redirect to
        // the login page.
        Ok(response.status() == StatusCode::MOVED_PERMANENTLY)
    }

    async fn get_transactions_by_date(&self, cookie: &str, from: NaiveDate) -> Result<PageResponse> {
        let start = from.format(FORM_DATE_FORMAT).to_string();
        let end = Local::now()
            .date_naive()
            .format(FORM_DATE_FORMAT)
            .to_string();

        tracing::debug!("Requesting transactions from {} to {}", start, end);

        let builder = self
            .client
            .post(self.url("?view=transaction"))
            .header(COOKIE, cookie)
            .header(ACCEPT, ACCEPT_HTML)
            .form(&[
                ("StartDate", start.as_str()),
                ("EndDate", end.as_str()),
                ("search", ""),
                ("s", ""),
            ]);
        self.fetch_page(builder).await
    }

    async fn get_all_current_sessions(&self, cookie: &str) -> Result<PageResponse> {
        let builder = self.authenticated(self.client.get(self.url("?view=rememberme")), cookie);
        self.fetch_page(builder).await
    }

    async fn logout_session(&self, cookie: &str, session_id: &str) -> Result<bool> {
        let response = self
            .authenticated(self.client.post(self.url("?view=rememberme")), cookie)
            .form(&[("delete", session_id)])
            .send()
            .await?;

        tracing::debug!("Session logout response status: {}", response.status());
        Ok(true)
    }

    async fn reset_password(&self, user_name: &str) -> Result<bool> {
        let response = self
            .client
            .post(self.url("?view=resetpassword"))
            .header(ACCEPT, ACCEPT_HTML)
            .form(&[
                ("type", "user"),
                ("Username", user_name),
                ("reset", RESET_BUTTON),
            ])
            .send()
            .await?;

        tracing::debug!("Password reset response status: {}", response.status());
        Ok(response.status().is_success())
    }
}
