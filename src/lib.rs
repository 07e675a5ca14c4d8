pub mod config;
pub mod core;
pub mod domain;
pub mod parser;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalOutput};

pub use crate::config::TomlConfig;
pub use crate::core::{request::PingPingRequestService, service::PingPingService};
pub use parser::RegexUserAgentParser;
pub use utils::error::{PingPingError, Result};
