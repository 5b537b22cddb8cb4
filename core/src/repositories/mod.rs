pub mod settings;

pub use settings::{CompanySenderRepository, InMemorySettingsRepository, ProviderSettingsRepository};
