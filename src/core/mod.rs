pub mod api_handler;
pub mod env_check;
pub mod payment_flow;

pub use crate::domain::model::{
    ApiRequest, ApiResponse, EntryStatus, EnvEntry, Payment, PaymentRequest, PaymentStatus,
};
pub use crate::domain::ports::{AccountClient, RequestLogic};
pub use crate::utils::error::Result;
