//! Request and response bodies

pub mod sms;

pub use sms::{BulkSmsRequest, PaymentSmsRequest, SendSmsRequest, TransactionSmsRequest};
