//! SMS dispatch services
//!
//! - `resolver` - Active provider and sender identity lookup with fallbacks
//! - `dispatcher` - Single sends, notification helpers and bulk campaigns
//! - `templates` - Notification message texts
//! - `traits` - The transport seam implemented by gateway adapters

mod config;
mod dispatcher;
mod resolver;
pub mod templates;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{DispatchConfig, SenderDefaults};
pub use dispatcher::SmsDispatcher;
pub use resolver::ProviderResolver;
pub use traits::{SmsTransport, TransportSet};
