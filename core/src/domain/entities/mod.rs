//! Domain entities representing core business objects.

pub mod notification;
pub mod settings;
pub mod sms;

// Re-export commonly used types
pub use notification::{OrderDetails, OrderStatusChange, RecipientType, TransactionNotice};
pub use settings::{CompanySenderSettings, ProviderSettings};
pub use sms::{
    BulkOptions, BulkProgress, BulkRecipient, BulkResult, DeliveryStatus, PerRecipientOutcome,
    ProviderId, SendRequest, SendResult,
};
