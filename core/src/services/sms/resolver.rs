//! Provider and sender identity resolution.
//!
//! Every lookup goes to the settings store; nothing is cached so a change
//! made by an administrator applies to the next send. Store failures never
//! reach the caller: they are logged and replaced by the configured defaults.

use std::sync::Arc;

use crate::domain::entities::sms::ProviderId;
use crate::repositories::{CompanySenderRepository, ProviderSettingsRepository};

use super::config::SenderDefaults;

pub struct ProviderResolver<P, C>
where
    P: ProviderSettingsRepository,
    C: CompanySenderRepository,
{
    provider_settings: Arc<P>,
    company_senders: Arc<C>,
    default_provider: ProviderId,
    sender_defaults: SenderDefaults,
}

impl<P, C> ProviderResolver<P, C>
where
    P: ProviderSettingsRepository,
    C: CompanySenderRepository,
{
    pub fn new(
        provider_settings: Arc<P>,
        company_senders: Arc<C>,
        default_provider: ProviderId,
        sender_defaults: SenderDefaults,
    ) -> Self {
        Self {
            provider_settings,
            company_senders,
            default_provider,
            sender_defaults,
        }
    }

    /// The provider currently selected in the settings store, or the default
    pub async fn get_active_provider(&self) -> ProviderId {
        match self.provider_settings.get_active_settings().await {
            Ok(Some(settings)) => settings.active_provider,
            Ok(None) => {
                tracing::debug!(
                    provider = %self.default_provider,
                    "No SMS provider configured, using default"
                );
                self.default_provider
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = %self.default_provider,
                    "Failed to read SMS provider settings, using default"
                );
                self.default_provider
            }
        }
    }

    /// Sender identity for a company, falling back to the provider default.
    ///
    /// Without a company there is no company lookup. Without a provider the
    /// active one is resolved first.
    pub async fn get_company_sender_id(
        &self,
        company_id: Option<&str>,
        provider: Option<ProviderId>,
    ) -> String {
        let provider = match provider {
            Some(provider) => provider,
            None => self.get_active_provider().await,
        };
        let default_sender = self.default_sender_id(provider);

        let Some(company_id) = company_id.filter(|id| !id.trim().is_empty()) else {
            return default_sender.to_string();
        };

        match self.company_senders.get_company_sender_id(company_id).await {
            Ok(Some(sender_id)) if !sender_id.trim().is_empty() => {
                tracing::debug!(
                    company_id = company_id,
                    sender_id = %sender_id,
                    "Using company sender id"
                );
                sender_id
            }
            Ok(_) => default_sender.to_string(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    company_id = company_id,
                    provider = %provider,
                    "Failed to read company sender id, using provider default"
                );
                default_sender.to_string()
            }
        }
    }

    /// Global default sender identity of a provider
    pub fn default_sender_id(&self, provider: ProviderId) -> &str {
        self.sender_defaults.for_provider(provider)
    }
}
