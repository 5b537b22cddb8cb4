//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `sms` - SMS gateways, sender defaults and dispatch pacing

pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sms::{MnotifyConfig, NaloConfig, SmsConfig, SmsMode, TemplateConfig};

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_VAR: &str = "FS_CONFIG";

/// Prefix for layered environment overrides (`FS_SMS__BULK_SPACING_MS=500`)
pub const ENV_PREFIX: &str = "FS";

/// Complete application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sms: SmsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let server = if environment.is_production() {
            ServerConfig::new("0.0.0.0", 8080)
        } else {
            ServerConfig::default()
        };

        Self {
            environment,
            server,
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration once at process start.
    ///
    /// Layers, lowest precedence first: environment defaults, the file named
    /// by `FS_CONFIG`, `FS_`-prefixed variables, then the conventional
    /// gateway variables (`NALO_USERNAME`, `MNOTIFY_API_KEY`, ...).
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();

        let defaults = config::Config::try_from(&Self::for_environment(environment))?;
        let mut builder = config::Config::builder().add_source(defaults);
        if let Ok(path) = std::env::var(CONFIG_FILE_VAR) {
            builder = builder.add_source(config::File::with_name(&path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.environment = environment;
        config.sms.apply_env_overrides();
        config.apply_server_env_overrides();
        Ok(config)
    }

    fn apply_server_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            self.server.allowed_origins = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
        }
    }
}
