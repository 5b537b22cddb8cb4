//! Type definitions shared between the HTTP layer and its clients

pub mod response;

pub use response::{ApiResponse, HealthResponse, HealthStatus, ServiceHealth};
