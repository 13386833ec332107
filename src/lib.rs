pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CheckEnvCli, PayAndStatusCli};
pub use config::ClientConfig;

pub use core::api_handler::{handle_request, Acknowledge};
pub use core::env_check::{check_env_file, classify_value, parse_env_entries, EnvReport};
pub use core::payment_flow::{
    create_client, pay_and_check_status, poll_payment_status, PollOutcome, PollPolicy,
};
pub use utils::error::{Result, ToolkitError};
