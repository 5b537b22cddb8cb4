//! Transport seam between the dispatch façade and the gateway adapters

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::sms::{ProviderId, SendResult};
use crate::errors::SmsError;

/// One outbound SMS gateway.
///
/// Implementations normalize the phone number themselves and fail with
/// [`SmsError::InvalidPhoneFormat`] before any network traffic when it is
/// not a valid Ghana number.
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Gateway this transport talks to
    fn provider(&self) -> ProviderId;

    /// Send one message. `sender_id` of `None` means the transport's own
    /// configured default sender.
    async fn send(
        &self,
        phone: &str,
        message: &str,
        sender_id: Option<&str>,
    ) -> Result<SendResult, SmsError>;

    /// Whether the transport is configured well enough to attempt a send
    async fn is_available(&self) -> bool {
        true
    }
}

/// The transports known to a dispatcher, at most one per provider
#[derive(Clone, Default)]
pub struct TransportSet {
    transports: HashMap<ProviderId, Arc<dyn SmsTransport>>,
}

impl TransportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transport under its own provider id, replacing any previous one
    pub fn with(mut self, transport: Arc<dyn SmsTransport>) -> Self {
        self.insert(transport);
        self
    }

    pub fn insert(&mut self, transport: Arc<dyn SmsTransport>) {
        self.transports.insert(transport.provider(), transport);
    }

    pub fn get(&self, provider: ProviderId) -> Result<&Arc<dyn SmsTransport>, SmsError> {
        self.transports
            .get(&provider)
            .ok_or_else(|| SmsError::UnsupportedProvider(provider.to_string()))
    }

    pub fn providers(&self) -> Vec<ProviderId> {
        ProviderId::ALL
            .into_iter()
            .filter(|p| self.transports.contains_key(p))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }
}

impl std::fmt::Debug for TransportSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportSet")
            .field("providers", &self.providers())
            .finish()
    }
}
