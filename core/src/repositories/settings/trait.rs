//! Read-only access to the persisted SMS settings.
//!
//! The settings themselves are owned by an external store (an admin screen
//! writes them); the dispatch services only ever read. Implementations must
//! not cache: every call reflects the store at that moment.

use async_trait::async_trait;

use crate::domain::entities::settings::ProviderSettings;
use crate::errors::SettingsError;

/// Source of the active provider record
#[async_trait]
pub trait ProviderSettingsRepository: Send + Sync {
    /// Fetch the active provider record
    ///
    /// # Returns
    /// * `Ok(Some(settings))` - A provider has been configured
    /// * `Ok(None)` - Nothing configured yet
    /// * `Err(SettingsError)` - The store could not be read
    async fn get_active_settings(&self) -> Result<Option<ProviderSettings>, SettingsError>;
}

/// Source of per-company sender identity overrides
#[async_trait]
pub trait CompanySenderRepository: Send + Sync {
    /// Fetch the custom sender id of a company
    ///
    /// Returns `Ok(None)` when the company is unknown or has no override.
    async fn get_company_sender_id(&self, company_id: &str)
        -> Result<Option<String>, SettingsError>;
}
