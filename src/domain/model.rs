use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// A single line of the transaction history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionModel {
    pub date: NaiveDateTime,
    pub location: String,
    pub description: String,
    /// Negative for a debit, positive for a credit.
    pub price: Decimal,
}

/// Transactions queried from a given date onwards.
///
/// The transactions are kept sorted by date, most recent first, whenever
/// they are assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedTransactionsModel {
    transactions: Vec<TransactionModel>,
    from_date: NaiveDateTime,
}

impl DatedTransactionsModel {
    pub fn new(from_date: NaiveDateTime) -> Self {
        Self {
            transactions: Vec::new(),
            from_date,
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<TransactionModel>) -> Self {
        self.set_transactions(transactions);
        self
    }

    pub fn set_transactions(&mut self, mut transactions: Vec<TransactionModel>) {
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        self.transactions = transactions;
    }

    pub fn transactions(&self) -> &[TransactionModel] {
        &self.transactions
    }

    pub fn from_date(&self) -> NaiveDateTime {
        self.from_date
    }
}

/// Several dated queries, most recent start date first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedTransactionsModelList {
    dated_transactions: Vec<DatedTransactionsModel>,
}

impl DatedTransactionsModelList {
    pub fn set_dated_transactions(&mut self, mut dated: Vec<DatedTransactionsModel>) {
        dated.sort_by(|a, b| b.from_date.cmp(&a.from_date));
        self.dated_transactions = dated;
    }

    pub fn dated_transactions(&self) -> &[DatedTransactionsModel] {
        &self.dated_transactions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurseModel {
    pub user_name: String,
    pub name: String,
    pub email: String,
    pub purse: String,
    pub balance: Decimal,
}

/// Structured description of a browser user-agent string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadableUserAgent {
    pub browser: String,
    pub browser_version: String,
    pub operating_system: String,
    pub operating_system_version: String,
    pub device: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionModel {
    pub last_active_date: NaiveDateTime,
    pub user_agent: ReadableUserAgent,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsModelList {
    pub sessions: Vec<SessionModel>,
}

/// Raw page body as returned by the site.
#[derive(Debug, Clone, Default)]
pub struct PageResponse {
    pub page: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginResponse {
    pub page: String,
    pub cookie: Option<String>,
}
