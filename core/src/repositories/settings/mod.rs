//! SMS settings repository module.

mod r#trait;
pub use r#trait::{CompanySenderRepository, ProviderSettingsRepository};

mod mock;
pub use mock::InMemorySettingsRepository;
