//! SMS gateway configuration
//!
//! Credentials and default sender identities for the two gateways, plus the
//! dispatch knobs (request timeout, bulk spacing). Built once at startup and
//! handed to the adapters by value.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether messages really leave the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmsMode {
    /// Send through the configured gateways
    #[default]
    Live,
    /// Log messages instead of sending them
    Mock,
}

impl std::str::FromStr for SmsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(SmsMode::Live),
            "mock" => Ok(SmsMode::Mock),
            _ => Err(format!("Invalid SMS mode: {}", s)),
        }
    }
}

/// SMS dispatch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SmsConfig {
    /// Provider used when neither the caller nor the settings store names one
    pub default_provider: String,

    /// Live or mock delivery
    pub mode: SmsMode,

    /// Upper bound on each gateway request, applied to both adapters
    pub request_timeout_secs: u64,

    /// Minimum pause between consecutive sends of a bulk campaign
    pub bulk_spacing_ms: u64,

    /// JSON file holding the active provider and company sender ids
    pub settings_path: String,

    pub nalo: NaloConfig,

    pub mnotify: MnotifyConfig,

    pub templates: TemplateConfig,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            default_provider: String::from("nalo"),
            mode: SmsMode::Live,
            request_timeout_secs: 30,
            bulk_spacing_ms: 1000,
            settings_path: String::from("data/sms_settings.json"),
            nalo: NaloConfig::default(),
            mnotify: MnotifyConfig::default(),
            templates: TemplateConfig::default(),
        }
    }
}

impl SmsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bulk_spacing(&self) -> Duration {
        Duration::from_millis(self.bulk_spacing_ms)
    }

    /// Apply the conventional unprefixed gateway variables (`NALO_USERNAME`,
    /// `MNOTIFY_API_KEY`, ...) on top of the layered configuration
    pub fn apply_env_overrides(&mut self) {
        override_from_env(&mut self.default_provider, "SMS_PROVIDER");
        override_from_env(&mut self.settings_path, "SMS_SETTINGS_PATH");
        override_from_env(&mut self.nalo.username, "NALO_USERNAME");
        override_from_env(&mut self.nalo.password, "NALO_PASSWORD");
        override_from_env(&mut self.nalo.source, "NALO_SOURCE");
        override_from_env(&mut self.mnotify.api_key, "MNOTIFY_API_KEY");
        override_from_env(&mut self.mnotify.sender_id, "MNOTIFY_SENDER_ID");

        if let Some(mode) = std::env::var("SMS_MODE").ok().and_then(|v| v.parse().ok()) {
            self.mode = mode;
        }
        if let Some(secs) = std::env::var("SMS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.request_timeout_secs = secs;
        }
        if let Some(ms) = std::env::var("SMS_BULK_SPACING_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.bulk_spacing_ms = ms;
        }
    }
}

fn override_from_env(target: &mut String, key: &str) {
    if let Ok(value) = std::env::var(key) {
        if !value.trim().is_empty() {
            *target = value;
        }
    }
}

/// Nalo Solutions gateway (query-string GET API)
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NaloConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Default sender identity
    pub source: String,
}

impl Default for NaloConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(
                "https://sms.nalosolutions.com/smsbackend/clientapi/Resl_Nalo/send-message/",
            ),
            username: String::new(),
            password: String::new(),
            source: String::from("KrapaShell"),
        }
    }
}

impl std::fmt::Debug for NaloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaloConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// mNotify gateway (JSON POST API)
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MnotifyConfig {
    pub base_url: String,
    pub api_key: String,
    /// Default sender identity
    pub sender_id: String,
}

impl Default for MnotifyConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://api.mnotify.com/api/sms/quick"),
            api_key: String::new(),
            sender_id: String::from("KrapaShell"),
        }
    }
}

impl std::fmt::Debug for MnotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnotifyConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("sender_id", &self.sender_id)
            .finish()
    }
}

/// Business details substituted into notification templates
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub station_name: String,
    pub helpline: String,
    pub currency: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            station_name: String::from("Ejisu-Krapa Shell"),
            helpline: String::from("0240431219"),
            currency: String::from("GHS"),
        }
    }
}
