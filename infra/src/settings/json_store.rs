//! JSON-file settings store
//!
//! File format:
//!
//! ```json
//! {
//!   "active_provider": "mnotify",
//!   "updated_at": "2024-05-01T09:30:00Z",
//!   "companies": { "star-oil": "StarOil", "other": null }
//! }
//! ```
//!
//! The file is read on every lookup so edits apply to the next send. A
//! missing file means nothing is configured.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs_core::domain::entities::settings::{CompanySenderSettings, ProviderSettings};
use fs_core::domain::entities::sms::ProviderId;
use fs_core::errors::SettingsError;
use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};

use crate::InfrastructureError;

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    active_provider: Option<ProviderId>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    companies: HashMap<String, Option<String>>,
}

/// File-backed implementation of both settings repositories
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<SettingsFile, InfrastructureError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "SMS settings file not found");
                return Ok(SettingsFile::default());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(SettingsFile::default());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl ProviderSettingsRepository for JsonSettingsStore {
    async fn get_active_settings(&self) -> Result<Option<ProviderSettings>, SettingsError> {
        let file = self.load().await?;
        Ok(file.active_provider.map(|active_provider| ProviderSettings {
            active_provider,
            updated_at: file.updated_at,
        }))
    }
}

#[async_trait]
impl CompanySenderRepository for JsonSettingsStore {
    async fn get_company_sender_id(
        &self,
        company_id: &str,
    ) -> Result<Option<String>, SettingsError> {
        let mut file = self.load().await?;
        let settings = CompanySenderSettings {
            company_id: company_id.to_string(),
            sender_id: file.companies.remove(company_id).flatten(),
        };
        Ok(settings.effective_sender_id().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_with(contents: &str) -> (tempfile::NamedTempFile, JsonSettingsStore) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let store = JsonSettingsStore::new(file.path());
        (file, store)
    }

    #[tokio::test]
    async fn test_reads_provider_and_companies() {
        let (_file, store) = store_with(
            r#"{"active_provider":"mnotify","companies":{"star-oil":"StarOil","blank":"","none":null}}"#,
        );

        let settings = store.get_active_settings().await.unwrap().unwrap();
        assert_eq!(settings.active_provider, ProviderId::Mnotify);
        assert_eq!(
            store.get_company_sender_id("star-oil").await.unwrap(),
            Some("StarOil".to_string())
        );
        assert_eq!(store.get_company_sender_id("blank").await.unwrap(), None);
        assert_eq!(store.get_company_sender_id("none").await.unwrap(), None);
        assert_eq!(store.get_company_sender_id("unknown").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_file_is_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("absent.json"));

        assert_eq!(store.get_active_settings().await.unwrap(), None);
        assert_eq!(store.get_company_sender_id("c1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let (_file, store) = store_with("{ not json");
        assert!(matches!(
            store.get_active_settings().await,
            Err(SettingsError::Malformed(_))
        ));

        let (_file, store) = store_with(r#"{"active_provider":"twilio"}"#);
        assert!(matches!(
            store.get_active_settings().await,
            Err(SettingsError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_changes_are_picked_up_without_restart() {
        let (file, store) = store_with(r#"{"active_provider":"nalo"}"#);
        assert_eq!(
            store.get_active_settings().await.unwrap().unwrap().active_provider,
            ProviderId::Nalo
        );

        std::fs::write(file.path(), r#"{"active_provider":"mnotify"}"#).unwrap();
        assert_eq!(
            store.get_active_settings().await.unwrap().unwrap().active_provider,
            ProviderId::Mnotify
        );
    }
}
