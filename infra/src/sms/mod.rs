//! SMS Service Module
//!
//! Gateway adapters plugging into the core [`SmsTransport`] trait.
//!
//! ## Features
//!
//! - **Nalo**: query-string GET gateway with plain-text responses
//! - **mNotify**: JSON POST gateway
//! - **Mock Implementation**: logs instead of sending
//! - **Security**: phone numbers are masked in logs, credentials never logged

use std::sync::Arc;

use fs_core::domain::entities::sms::ProviderId;
use fs_core::services::sms::{SmsTransport, TransportSet};
use fs_shared::config::{SmsConfig, SmsMode};

pub mod mnotify;
pub mod mock_sms;
pub mod nalo;
pub mod response;

pub use mnotify::MnotifySmsService;
pub use mock_sms::MockSmsService;
pub use nalo::NaloSmsService;
pub use response::{parse_mnotify_response, parse_nalo_response, ParsedResponse};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create one transport per provider based on configuration
///
/// Mock mode yields a [`MockSmsService`] for every provider. Live mode builds
/// both gateway adapters with the configured request timeout; a gateway
/// without credentials is still registered but logged as unavailable.
pub async fn create_transports(config: &SmsConfig) -> Result<TransportSet, InfrastructureError> {
    if config.mode == SmsMode::Mock {
        tracing::info!("SMS mode is mock, messages will be logged instead of sent");
        return Ok(ProviderId::ALL
            .into_iter()
            .fold(TransportSet::new(), |set, provider| {
                set.with(Arc::new(MockSmsService::new(provider)))
            }));
    }

    let timeout = config.request_timeout();
    let nalo: Arc<dyn SmsTransport> = Arc::new(NaloSmsService::new(config.nalo.clone(), timeout)?);
    let mnotify: Arc<dyn SmsTransport> =
        Arc::new(MnotifySmsService::new(config.mnotify.clone(), timeout)?);

    for transport in [&nalo, &mnotify] {
        if !transport.is_available().await {
            tracing::warn!(
                provider = %transport.provider(),
                "SMS gateway credentials missing, sends through it will fail"
            );
        }
    }

    Ok(TransportSet::new().with(nalo).with(mnotify))
}
