//! HTTP route handlers
//!
//! - `health` - Gateway availability probe
//! - `sms` - Single sends, transaction notifications and bulk campaigns

pub mod health;
pub mod sms;

pub use sms::AppState;
