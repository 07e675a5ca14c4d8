// Page-to-model extraction. Plain substring search and slicing over the raw
// page text; every function is pure.

pub mod format;
pub mod login;
pub mod markers;
pub mod purse;
pub mod rows;
pub mod scan;
pub mod sessions;
pub mod transactions;
pub mod user_agent;

pub use login::login_was_valid;
pub use purse::parse_user_purse;
pub use sessions::{align_sessions, parse_user_sessions};
pub use transactions::{decode_transactions, parse_transactions_by_date};
pub use user_agent::{RegexUserAgentParser, UserAgentParser};
