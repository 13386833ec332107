#[cfg(feature = "cli")]
pub mod cli;
pub mod payment;

#[cfg(feature = "cli")]
pub use cli::{CheckEnvCli, PayAndStatusCli};
pub use payment::ClientConfig;
