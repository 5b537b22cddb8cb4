//! Business services containing domain logic and use cases.

pub mod sms;

// Re-export commonly used types
pub use sms::{
    DispatchConfig, ProviderResolver, SenderDefaults, SmsDispatcher, SmsTransport, TransportSet,
};
