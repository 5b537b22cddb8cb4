//! # Infrastructure Layer
//!
//! Concrete implementations behind the core traits:
//! - **SMS**: Nalo and mNotify gateway adapters, their response parsers and a
//!   mock transport
//! - **Settings**: JSON-file store for the active provider and company sender ids

// Re-export core types for convenience
pub use fs_core::errors::*;

/// SMS service module - External SMS gateways
pub mod sms;

/// Settings module - File-backed SMS settings store
pub mod settings;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction or request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file could not be read
    #[error("Settings file error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON of the expected shape
    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<InfrastructureError> for SettingsError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Json(e) => SettingsError::Malformed(e.to_string()),
            other => SettingsError::Unavailable(other.to_string()),
        }
    }
}
