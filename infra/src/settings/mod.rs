//! SMS settings stores

pub mod json_store;

pub use json_store::JsonSettingsStore;
