//! Domain-specific error types and error handling.

mod types;

pub use types::{SettingsError, SmsError};

pub type SmsResult<T> = Result<T, SmsError>;
