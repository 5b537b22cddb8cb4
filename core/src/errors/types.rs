//! Error types for SMS dispatch and settings lookups

use thiserror::Error;

use crate::domain::entities::sms::ProviderId;

/// Failure of a single SMS send.
///
/// Gateway failures keep the HTTP status and the provider's own code apart:
/// `Transport` means the gateway could not be reached or answered non-2xx,
/// `ProviderEncoded` means it answered 2xx with a failure in the payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmsError {
    #[error("Invalid phone number format: {phone}")]
    InvalidPhoneFormat { phone: String },

    /// `status` is `None` when no HTTP response was received
    #[error("{provider} SMS API error: {} - {body}", describe_status(.status))]
    Transport {
        provider: ProviderId,
        status: Option<u16>,
        body: String,
    },

    #[error("{provider} SMS request timed out after {seconds}s")]
    Timeout { provider: ProviderId, seconds: u64 },

    #[error("{provider} SMS error{}: {message}", describe_code(.code))]
    ProviderEncoded {
        provider: ProviderId,
        code: Option<i64>,
        message: String,
    },

    #[error("Unsupported SMS provider: {0}")]
    UnsupportedProvider(String),

    #[error("Internal SMS error: {0}")]
    Internal(String),
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => String::from("no response"),
    }
}

fn describe_code(code: &Option<i64>) -> String {
    match code {
        Some(code) => format!(" ({})", code),
        None => String::new(),
    }
}

impl SmsError {
    pub fn transport(provider: ProviderId, status: Option<u16>, body: impl Into<String>) -> Self {
        SmsError::Transport {
            provider,
            status,
            body: body.into(),
        }
    }

    pub fn provider_encoded(
        provider: ProviderId,
        code: Option<i64>,
        message: impl Into<String>,
    ) -> Self {
        SmsError::ProviderEncoded {
            provider,
            code,
            message: message.into(),
        }
    }

    /// Gateway that produced the error, if any
    pub fn provider(&self) -> Option<ProviderId> {
        match self {
            SmsError::Transport { provider, .. }
            | SmsError::Timeout { provider, .. }
            | SmsError::ProviderEncoded { provider, .. } => Some(*provider),
            _ => None,
        }
    }

    /// Provider-specific status code embedded in the response payload
    pub fn provider_code(&self) -> Option<i64> {
        match self {
            SmsError::ProviderEncoded { code, .. } => *code,
            _ => None,
        }
    }

    /// HTTP status returned by the gateway
    pub fn http_status(&self) -> Option<u16> {
        match self {
            SmsError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SmsError::Timeout { .. })
    }

    /// Whether the failure happened before or while talking to the gateway
    pub fn is_transport(&self) -> bool {
        matches!(self, SmsError::Transport { .. } | SmsError::Timeout { .. })
    }
}

/// Settings store failures. Never surfaced past the provider resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Settings store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed settings: {0}")]
    Malformed(String),
}
