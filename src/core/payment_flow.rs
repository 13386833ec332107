use crate::config::payment::ClientConfig;
use crate::domain::model::{PaymentRequest, PaymentStatus};
use crate::domain::ports::AccountClient;
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{validate_positive_number, Validate};
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Fixed-count, fixed-delay status polling.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub max_attempts: u32,
    /// Delay between two consecutive attempts; not applied after the last one.
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Validate for PollPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_number("max_attempts", self.max_attempts, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// Last status observed, `Pending` if no attempt ran.
    pub status: PaymentStatus,
    pub attempts: u32,
}

impl PollOutcome {
    pub fn is_final(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Builds the account client for the configured network.
///
/// No SDK is wired in yet, so this validates the configuration and then
/// fails. Swap the body for the real factory call once one is available.
pub fn create_client(config: &ClientConfig) -> Result<Box<dyn AccountClient>> {
    config.validate()?;
    tracing::debug!("Creating account client for network {}", config.network);

    Err(ToolkitError::unimplemented(
        "create_client",
        "Replace it with real SDK initialization.",
    ))
}

pub async fn poll_payment_status(
    client: &dyn AccountClient,
    payment_id: &str,
    policy: &PollPolicy,
) -> Result<PollOutcome> {
    let mut outcome = PollOutcome {
        status: PaymentStatus::Pending,
        attempts: 0,
    };

    for attempt in 1..=policy.max_attempts {
        tracing::info!("Checking status (attempt {})…", attempt);

        outcome.status = client.payment_status(payment_id).await?;
        outcome.attempts = attempt;
        tracing::info!("Current status: {}", outcome.status);

        if outcome.is_final() {
            tracing::info!("Final status reached, stopping polling.");
            break;
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    if !outcome.is_final() {
        tracing::warn!(
            "Payment {} still {} after {} attempts",
            payment_id,
            outcome.status,
            outcome.attempts
        );
    }

    Ok(outcome)
}

pub async fn pay_and_check_status(
    client: &dyn AccountClient,
    request: &PaymentRequest,
    policy: &PollPolicy,
) -> Result<PollOutcome> {
    tracing::info!("Starting pay + status example…");

    let payment = client.pay(request).await?;
    tracing::info!("Created payment: {}", payment.id);

    let outcome = poll_payment_status(client, &payment.id, policy).await?;

    tracing::info!("Pay + status example finished.");
    Ok(outcome)
}
