//! Shared error codes

/// Error codes carried in `ApiResponse::code`
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const PHONE_INVALID: &str = "PHONE_INVALID";
    pub const PROVIDER_UNSUPPORTED: &str = "PROVIDER_UNSUPPORTED";
    pub const SMS_PROVIDER_ERROR: &str = "SMS_PROVIDER_ERROR";
    pub const SMS_TRANSPORT_ERROR: &str = "SMS_TRANSPORT_ERROR";
    pub const SMS_TIMEOUT: &str = "SMS_TIMEOUT";
}
