//! Shared utilities and common types for the fuel station server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and response structures
//! - Phone number normalization and validation

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, MnotifyConfig, NaloConfig, ServerConfig,
    SmsConfig, SmsMode, TemplateConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, HealthResponse, HealthStatus, ServiceHealth};
pub use utils::phone;
