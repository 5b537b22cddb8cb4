//! Domain layer containing SMS dispatch entities and settings records.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
