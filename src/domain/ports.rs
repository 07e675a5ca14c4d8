use crate::domain::model::{LoginResponse, PageResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn cookie_name(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}

/// Outbound calls to the PingPing site. Implementations own the network;
/// everything they return is raw page text.
#[async_trait]
pub trait RequestService: Send + Sync {
    async fn login_user(&self, user_name: &str, password: &str) -> Result<LoginResponse>;
    async fn get_user_purse(&self, cookie: &str) -> Result<PageResponse>;
    async fn log_out_user(&self, cookie: &str) -> Result<bool>;
    async fn get_transactions_by_date(&self, cookie: &str, from: NaiveDate) -> Result<PageResponse>;
    async fn get_all_current_sessions(&self, cookie: &str) -> Result<PageResponse>;
    async fn logout_session(&self, cookie: &str, session_id: &str) -> Result<bool>;
    async fn reset_password(&self, user_name: &str) -> Result<bool>;
}
