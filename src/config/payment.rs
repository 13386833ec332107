use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use std::env;

pub const DEFAULT_NETWORK: &str = "base-sepolia";

/// Network and credential settings handed to the account client factory.
#[derive(Clone)]
pub struct ClientConfig {
    pub network: String,
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Reads `BASE_NETWORK` and `BASE_API_KEY`; the network falls back to `base-sepolia`.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("BASE_NETWORK").ok(), env::var("BASE_API_KEY").ok())
    }

    pub fn from_vars(network: Option<String>, api_key: Option<String>) -> Self {
        Self {
            network: network.unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
            api_key,
        }
    }

    /// Values given explicitly (e.g. on the command line) win over the loaded ones.
    pub fn with_overrides(mut self, network: Option<&str>, api_key: Option<&str>) -> Self {
        if let Some(network) = network {
            self.network = network.to_string();
        }
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key.to_string());
        }
        self
    }
}

// api_key stays out of logs
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("network", &self.network)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("network", &self.network)?;
        let api_key = validate_required_field("BASE_API_KEY", &self.api_key)?;
        validate_non_empty_string("BASE_API_KEY", api_key)?;

        tracing::debug!("✅ Client configuration validation passed");
        Ok(())
    }
}
