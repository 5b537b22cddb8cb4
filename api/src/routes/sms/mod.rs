//! SMS route handlers

pub mod bulk;
pub mod notifications;
pub mod send;

use std::sync::Arc;

use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};
use fs_core::services::sms::SmsDispatcher;

/// Application state that holds shared services
pub struct AppState<P, C>
where
    P: ProviderSettingsRepository,
    C: CompanySenderRepository,
{
    pub dispatcher: Arc<SmsDispatcher<P, C>>,
}

impl<P, C> AppState<P, C>
where
    P: ProviderSettingsRepository,
    C: CompanySenderRepository,
{
    pub fn new(dispatcher: Arc<SmsDispatcher<P, C>>) -> Self {
        Self { dispatcher }
    }
}
