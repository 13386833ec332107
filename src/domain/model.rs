use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `KEY=VALUE` line of an environment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Placeholder,
    Ok,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Placeholder => write!(f, "placeholder"),
            EntryStatus::Ok => write!(f, "ok"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// USD or token units depending on the account setup.
    pub amount: Decimal,
    pub to: String,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded | PaymentStatus::Failed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// Inbound request as seen by the handler. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub method: Option<String>,
    pub url: Option<String>,
    pub original_url: Option<String>,
    pub params: Option<serde_json::Value>,
    pub query: Option<serde_json::Value>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn effective_url(&self) -> Option<&str> {
        self.original_url.as_deref().or(self.url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            body: serde_json::json!({ "ok": true }),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: serde_json::json!({ "message": "Internal server error" }),
        }
    }
}

/// Structured record logged when request handling fails.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    pub method: Option<String>,
    pub url: Option<String>,
    pub params: Option<serde_json::Value>,
    pub query: Option<serde_json::Value>,
    pub body: Option<serde_json::Value>,
    pub error: String,
    pub stack: String,
}

impl RequestContext {
    pub fn capture(req: &ApiRequest, err: &anyhow::Error) -> Self {
        Self {
            method: req.method.clone(),
            url: req.effective_url().map(str::to_string),
            params: req.params.clone(),
            query: req.query.clone(),
            body: req.body.clone(),
            error: err.to_string(),
            stack: format!("{:?}", err),
        }
    }
}
