//! Persisted SMS settings, owned by an external settings store and only
//! ever read by the dispatch services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sms::ProviderId;

/// The single active provider record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub active_provider: ProviderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProviderSettings {
    pub fn new(active_provider: ProviderId) -> Self {
        Self {
            active_provider,
            updated_at: None,
        }
    }
}

/// Per-company sender identity override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySenderSettings {
    pub company_id: String,
    /// Custom sender id; `None` or blank means use the provider default
    #[serde(default)]
    pub sender_id: Option<String>,
}

impl CompanySenderSettings {
    /// The configured sender id, ignoring blank values
    pub fn effective_sender_id(&self) -> Option<&str> {
        self.sender_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
