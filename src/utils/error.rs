use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{path} not found")]
    EnvFileNotFound { path: String },

    #[error("{operation} is a placeholder. {hint}")]
    Unimplemented { operation: String, hint: String },

    #[error("Account client error: {message}")]
    ClientError { message: String },
}

impl ToolkitError {
    pub fn unimplemented(operation: &str, hint: &str) -> Self {
        Self::Unimplemented {
            operation: operation.to_string(),
            hint: hint.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EnvFileNotFound { path } => format!("{} not found in project root.", path),
            Self::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured.", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::EnvFileNotFound { .. } => {
                "Create the file next to your .env and list every variable with a sample value"
            }
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the command-line flags and environment variables"
            }
            Self::Unimplemented { .. } => "Wire in the real account SDK before running this flow",
            Self::ClientError { .. } => "Inspect the account client logs for the failing call",
            Self::IoError(_) => "Check file permissions and that the path is readable",
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
