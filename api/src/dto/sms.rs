use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use fs_core::domain::entities::{BulkOptions, BulkRecipient, ProviderId, SendRequest, TransactionNotice};
use fs_core::errors::SmsError;
use fs_shared::phone::{validate_ghana_phone, PhoneValidation};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendSmsRequest {
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(length(min = 1, max = 918))]
    pub message: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 11))]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl SendSmsRequest {
    pub fn into_send_request(self) -> Result<SendRequest, SmsError> {
        let mut request = SendRequest::new(self.phone, self.message);
        request.provider = parse_provider(self.provider.as_deref())?;
        request.sender_id = self.sender_id;
        request.company_id = self.company_id;
        Ok(request)
    }
}

/// Fields are optional so a missing one is reported as a 400 with the
/// standard envelope rather than a bare deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransactionSmsRequest {
    #[serde(default)]
    pub transaction: Option<TransactionNotice>,
    #[serde(default)]
    #[validate(custom = "validate_phone")]
    pub phone_number: Option<String>,
    /// `driver` or `company-manager`
    #[serde(default)]
    pub recipient_type: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentSmsRequest {
    #[serde(default)]
    pub transaction: Option<TransactionNotice>,
    #[serde(default)]
    #[validate(custom = "validate_phone")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
}

/// At most 1000 recipients per request. Recipient phones are not validated
/// here: a bad number fails only its own entry of the campaign.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkSmsRequest {
    #[validate(length(min = 1, max = 1000))]
    pub recipients: Vec<BulkRecipient>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 11))]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl BulkSmsRequest {
    pub fn into_parts(self) -> Result<(Vec<BulkRecipient>, BulkOptions), SmsError> {
        let options = BulkOptions {
            provider: parse_provider(self.provider.as_deref())?,
            sender_id: self.sender_id,
            company_id: self.company_id,
        };
        Ok((self.recipients, options))
    }
}

/// Blank means "let the resolver decide"
pub fn parse_provider(provider: Option<&str>) -> Result<Option<ProviderId>, SmsError> {
    match provider.map(str::trim).filter(|p| !p.is_empty()) {
        Some(name) => name
            .parse()
            .map(Some)
            .map_err(|_| SmsError::UnsupportedProvider(name.to_string())),
        None => Ok(None),
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match validate_ghana_phone(phone) {
        PhoneValidation::Valid { .. } => Ok(()),
        PhoneValidation::Invalid { reason } => {
            let mut error = ValidationError::new("phone");
            error.message = Some(Cow::Borrowed(reason.message()));
            Err(error)
        }
    }
}
