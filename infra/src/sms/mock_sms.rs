//! Mock SMS transport
//!
//! Logs messages instead of sending them. Used in `mock` mode and in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use fs_core::domain::entities::sms::{ProviderId, SendResult};
use fs_core::errors::SmsError;
use fs_core::services::sms::SmsTransport;
use fs_shared::phone::{mask_phone_number, normalize_phone_number};

/// Mock transport standing in for one gateway
///
/// This implementation:
/// - Validates phone numbers like the real adapters
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockSmsService {
    provider: ProviderId,
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
}

impl MockSmsService {
    pub fn new(provider: ProviderId) -> Self {
        Self {
            provider,
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

#[async_trait]
impl SmsTransport for MockSmsService {
    fn provider(&self) -> ProviderId {
        self.provider
    }

    async fn send(
        &self,
        phone: &str,
        message: &str,
        sender_id: Option<&str>,
    ) -> Result<SendResult, SmsError> {
        let destination =
            normalize_phone_number(phone).ok_or_else(|| SmsError::InvalidPhoneFormat {
                phone: phone.to_string(),
            })?;
        let masked = mask_phone_number(&destination);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                provider = %self.provider,
                phone = %masked,
                "Mock SMS service simulating failure"
            );
            return Err(SmsError::transport(
                self.provider,
                Some(503),
                "Simulated SMS sending failure",
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_service",
            provider = %self.provider,
            phone = %masked,
            sender_id = ?sender_id,
            message_id = %message_id,
            message_length = message.len(),
            count = count,
            "SMS sent successfully (mock)"
        );

        Ok(SendResult::sent(
            self.provider,
            Some(message_id.clone()),
            serde_json::json!({ "mock": true, "message_id": message_id }),
        ))
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
