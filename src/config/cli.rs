use crate::config::payment::ClientConfig;
use crate::core::env_check::DEFAULT_ENV_EXAMPLE;
use crate::core::payment_flow::{PollPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::domain::model::PaymentRequest;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_amount, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "check-env")]
#[command(about = "Sanity-check the .env.example file for placeholder values")]
pub struct CheckEnvCli {
    #[arg(long, default_value = DEFAULT_ENV_EXAMPLE)]
    pub file: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pay-and-status")]
#[command(about = "Create a payment and poll its status until it settles")]
pub struct PayAndStatusCli {
    #[arg(long, default_value = "1.00")]
    pub amount: String,

    #[arg(long, default_value = "0xRecipientAddressHere")]
    pub to: String,

    #[arg(long, default_value = "Order #1234", help = "Payment memo, empty for none")]
    pub memo: String,

    #[arg(long, help = "Overrides BASE_NETWORK (default base-sepolia)")]
    pub network: Option<String>,

    #[arg(long, help = "Overrides BASE_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(long, default_value = "3")]
    pub interval_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl PayAndStatusCli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::from_env().with_overrides(self.network.as_deref(), self.api_key.as_deref())
    }

    pub fn payment_request(&self) -> Result<PaymentRequest> {
        let amount = validate_amount("amount", &self.amount)?;
        validate_non_empty_string("to", &self.to)?;

        let memo = self.memo.trim();
        Ok(PaymentRequest {
            amount,
            to: self.to.trim().to_string(),
            memo: (!memo.is_empty()).then(|| memo.to_string()),
        })
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            max_attempts: self.max_attempts,
            interval: Duration::from_secs(self.interval_secs),
        }
    }
}

impl Validate for PayAndStatusCli {
    fn validate(&self) -> Result<()> {
        self.payment_request()?;
        validate_positive_number("max_attempts", self.max_attempts, 1)?;
        validate_range("interval_secs", self.interval_secs, 0, 300)?;
        Ok(())
    }
}
