//! SMS dispatch entities: provider identity, send requests and results,
//! and the bookkeeping of bulk campaigns.

use serde::{Deserialize, Serialize};

/// Outbound SMS gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Nalo Solutions (query-string GET API)
    #[default]
    Nalo,
    /// mNotify (JSON POST API)
    Mnotify,
}

impl ProviderId {
    /// All supported providers
    pub const ALL: [ProviderId; 2] = [ProviderId::Nalo, ProviderId::Mnotify];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Nalo => "nalo",
            ProviderId::Mnotify => "mnotify",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nalo" => Ok(ProviderId::Nalo),
            "mnotify" => Ok(ProviderId::Mnotify),
            _ => Err(format!("Unknown SMS provider: {}", s)),
        }
    }
}

/// A single outbound message. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    pub phone_number: String,
    pub message: String,
    /// Gateway to use; resolved from settings when absent
    #[serde(default)]
    pub provider: Option<ProviderId>,
    /// Sender identity; resolved from the company or provider default when absent
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl SendRequest {
    pub fn new(phone_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            message: message.into(),
            provider: None,
            sender_id: None,
            company_id: None,
        }
    }

    pub fn with_provider(mut self, provider: ProviderId) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.sender_id = Some(sender_id.into());
        self
    }

    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }
}

/// Successful delivery to a gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendResult {
    pub success: bool,
    pub provider: ProviderId,
    /// Gateway message identifier. Only Nalo may omit it.
    pub message_id: Option<String>,
    /// Unparsed gateway response (text body or JSON document)
    pub raw: serde_json::Value,
}

impl SendResult {
    pub fn sent(provider: ProviderId, message_id: Option<String>, raw: serde_json::Value) -> Self {
        Self {
            success: true,
            provider,
            message_id,
            raw,
        }
    }
}

/// One entry of a bulk campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRecipient {
    pub phone: String,
    pub message: String,
    /// Caller-side identifier, echoed back in the outcome
    pub id: String,
}

/// Options shared by every message of a bulk campaign
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOptions {
    pub provider: Option<ProviderId>,
    pub sender_id: Option<String>,
    pub company_id: Option<String>,
}

/// Terminal state of one recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// What happened to one recipient of a bulk campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerRecipientOutcome {
    pub phone: String,
    pub recipient_id: String,
    pub status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PerRecipientOutcome {
    pub fn sent(recipient: &BulkRecipient, message_id: Option<String>) -> Self {
        Self {
            phone: recipient.phone.clone(),
            recipient_id: recipient.id.clone(),
            status: DeliveryStatus::Sent,
            message_id,
            error: None,
        }
    }

    pub fn failed(recipient: &BulkRecipient, error: impl Into<String>) -> Self {
        Self {
            phone: recipient.phone.clone(),
            recipient_id: recipient.id.clone(),
            status: DeliveryStatus::Failed,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Progress event emitted after each bulk attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkProgress {
    /// 1-based position of this recipient
    pub current: usize,
    pub total: usize,
    #[serde(flatten)]
    pub outcome: PerRecipientOutcome,
}

impl BulkProgress {
    pub fn status(&self) -> DeliveryStatus {
        self.outcome.status
    }

    pub fn recipient_id(&self) -> &str {
        &self.outcome.recipient_id
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

/// Summary of a bulk campaign. `sent + failed == total` and `details` is in
/// processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResult {
    pub total: usize,
    pub sent: usize,
    pub failed: usize,
    pub details: Vec<PerRecipientOutcome>,
}

impl BulkResult {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            sent: 0,
            failed: 0,
            details: Vec::with_capacity(total),
        }
    }

    /// Record the outcome of the next recipient
    pub fn record(&mut self, outcome: PerRecipientOutcome) {
        match outcome.status {
            DeliveryStatus::Sent => self.sent += 1,
            DeliveryStatus::Failed => self.failed += 1,
        }
        self.details.push(outcome);
    }

    pub fn is_complete(&self) -> bool {
        self.details.len() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient(id: &str) -> BulkRecipient {
        BulkRecipient {
            phone: "0241234567".to_string(),
            message: "hello".to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_provider_id_parsing() {
        assert_eq!("nalo".parse::<ProviderId>(), Ok(ProviderId::Nalo));
        assert_eq!(" MNotify ".parse::<ProviderId>(), Ok(ProviderId::Mnotify));
        assert!("twilio".parse::<ProviderId>().is_err());
        assert_eq!(ProviderId::Mnotify.to_string(), "mnotify");
        assert_eq!(ProviderId::default(), ProviderId::Nalo);
    }

    #[test]
    fn test_provider_id_serde() {
        assert_eq!(serde_json::to_value(ProviderId::Nalo).unwrap(), "nalo");
        let parsed: ProviderId = serde_json::from_str("\"mnotify\"").unwrap();
        assert_eq!(parsed, ProviderId::Mnotify);
    }

    #[test]
    fn test_bulk_result_accounting() {
        let mut result = BulkResult::new(3);
        result.record(PerRecipientOutcome::sent(&recipient("a"), Some("m1".to_string())));
        result.record(PerRecipientOutcome::failed(&recipient("b"), "boom"));
        assert!(!result.is_complete());
        result.record(PerRecipientOutcome::sent(&recipient("c"), None));

        assert_eq!(result.sent, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.sent + result.failed, result.total);
        assert!(result.is_complete());
        let ids: Vec<_> = result.details.iter().map(|d| d.recipient_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_progress_serializes_flat() {
        let progress = BulkProgress {
            current: 2,
            total: 2,
            outcome: PerRecipientOutcome::failed(&recipient("r-2"), "Invalid phone number format"),
        };
        let json = serde_json::to_value(&progress).unwrap();

        assert_eq!(json["current"], 2);
        assert_eq!(json["status"], "failed");
        assert_eq!(json["recipient_id"], "r-2");
        assert_eq!(json["error"], "Invalid phone number format");
        assert!(json.get("message_id").is_none());
        assert!(progress.is_last());
    }
}
