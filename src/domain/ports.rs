use crate::domain::model::{ApiRequest, Payment, PaymentRequest, PaymentStatus};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The account SDK surface the payment flow is written against.
#[async_trait]
pub trait AccountClient: Send + Sync {
    async fn pay(&self, request: &PaymentRequest) -> Result<Payment>;
    async fn payment_status(&self, payment_id: &str) -> Result<PaymentStatus>;
}

/// Caller-supplied request handling wrapped by `handle_request`.
#[async_trait]
pub trait RequestLogic: Send + Sync {
    async fn handle(&self, req: &ApiRequest) -> anyhow::Result<()>;
}
