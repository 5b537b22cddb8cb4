//! # Fuel Station Core
//!
//! Core business logic for outbound SMS: domain entities, the provider
//! resolver, the dispatch façade with bulk sequencing, message templates,
//! settings repository interfaces and error types. Gateway adapters live in
//! the infrastructure crate and plug in through [`services::sms::SmsTransport`].

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
