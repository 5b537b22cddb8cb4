//! Configuration for the SMS dispatch services

use std::time::Duration;

use fs_shared::config::{SmsConfig, TemplateConfig};

use crate::domain::entities::sms::ProviderId;

/// Default sender identity per gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderDefaults {
    pub nalo: String,
    pub mnotify: String,
}

impl SenderDefaults {
    pub fn for_provider(&self, provider: ProviderId) -> &str {
        match provider {
            ProviderId::Nalo => &self.nalo,
            ProviderId::Mnotify => &self.mnotify,
        }
    }
}

impl Default for SenderDefaults {
    fn default() -> Self {
        Self {
            nalo: String::from("KrapaShell"),
            mnotify: String::from("KrapaShell"),
        }
    }
}

/// Configuration for the dispatcher and resolver
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Provider used when the settings store has none
    pub default_provider: ProviderId,
    pub sender_defaults: SenderDefaults,
    /// Minimum pause between consecutive bulk sends
    pub bulk_spacing: Duration,
    pub templates: TemplateConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_provider: ProviderId::Nalo,
            sender_defaults: SenderDefaults::default(),
            bulk_spacing: Duration::from_secs(1),
            templates: TemplateConfig::default(),
        }
    }
}

impl DispatchConfig {
    pub fn from_sms_config(config: &SmsConfig) -> Self {
        let default_provider = config.default_provider.parse().unwrap_or_else(|_| {
            tracing::warn!(
                configured = %config.default_provider,
                fallback = %ProviderId::Nalo,
                "Unknown default SMS provider in configuration, falling back"
            );
            ProviderId::Nalo
        });

        Self {
            default_provider,
            sender_defaults: SenderDefaults {
                nalo: config.nalo.source.clone(),
                mnotify: config.mnotify.sender_id.clone(),
            },
            bulk_spacing: config.bulk_spacing(),
            templates: config.templates.clone(),
        }
    }

    pub fn with_bulk_spacing(mut self, spacing: Duration) -> Self {
        self.bulk_spacing = spacing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sms_config() {
        let mut sms = SmsConfig::default();
        sms.default_provider = "MNOTIFY".to_string();
        sms.bulk_spacing_ms = 250;
        sms.nalo.source = "NaloSender".to_string();
        sms.mnotify.sender_id = "MnSender".to_string();

        let config = DispatchConfig::from_sms_config(&sms);
        assert_eq!(config.default_provider, ProviderId::Mnotify);
        assert_eq!(config.bulk_spacing, Duration::from_millis(250));
        assert_eq!(config.sender_defaults.for_provider(ProviderId::Nalo), "NaloSender");
        assert_eq!(config.sender_defaults.for_provider(ProviderId::Mnotify), "MnSender");
    }

    #[test]
    fn test_unknown_default_provider_falls_back_to_nalo() {
        let mut sms = SmsConfig::default();
        sms.default_provider = "twilio".to_string();

        assert_eq!(DispatchConfig::from_sms_config(&sms).default_provider, ProviderId::Nalo);
    }
}
