//! In-memory implementation of the settings repositories for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::settings::{CompanySenderSettings, ProviderSettings};
use crate::domain::entities::sms::ProviderId;
use crate::errors::SettingsError;

use super::r#trait::{CompanySenderRepository, ProviderSettingsRepository};

/// In-memory settings store implementing both repository traits
pub struct InMemorySettingsRepository {
    provider: Arc<RwLock<Option<ProviderSettings>>>,
    companies: Arc<RwLock<HashMap<String, CompanySenderSettings>>>,
    fail: AtomicBool,
    provider_lookups: AtomicUsize,
    company_lookups: AtomicUsize,
}

impl InMemorySettingsRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            provider: Arc::new(RwLock::new(None)),
            companies: Arc::new(RwLock::new(HashMap::new())),
            fail: AtomicBool::new(false),
            provider_lookups: AtomicUsize::new(0),
            company_lookups: AtomicUsize::new(0),
        }
    }

    /// Create a repository with an active provider already set
    pub fn with_active_provider(provider: ProviderId) -> Self {
        Self {
            provider: Arc::new(RwLock::new(Some(ProviderSettings::new(provider)))),
            ..Self::new()
        }
    }

    pub async fn set_active_provider(&self, provider: ProviderId) {
        *self.provider.write().await = Some(ProviderSettings::new(provider));
    }

    pub async fn set_company_sender(&self, company_id: &str, sender_id: Option<&str>) {
        self.companies.write().await.insert(
            company_id.to_string(),
            CompanySenderSettings {
                company_id: company_id.to_string(),
                sender_id: sender_id.map(str::to_string),
            },
        );
    }

    /// Make every lookup fail as if the store were unreachable
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of provider record reads so far
    pub fn provider_lookups(&self) -> usize {
        self.provider_lookups.load(Ordering::SeqCst)
    }

    /// Number of company sender reads so far
    pub fn company_lookups(&self) -> usize {
        self.company_lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), SettingsError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(SettingsError::Unavailable(
                "simulated settings store failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InMemorySettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderSettingsRepository for InMemorySettingsRepository {
    async fn get_active_settings(&self) -> Result<Option<ProviderSettings>, SettingsError> {
        self.provider_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.provider.read().await.clone())
    }
}

#[async_trait]
impl CompanySenderRepository for InMemorySettingsRepository {
    async fn get_company_sender_id(
        &self,
        company_id: &str,
    ) -> Result<Option<String>, SettingsError> {
        self.company_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let companies = self.companies.read().await;
        Ok(companies
            .get(company_id)
            .and_then(|c| c.effective_sender_id())
            .map(str::to_string))
    }
}
