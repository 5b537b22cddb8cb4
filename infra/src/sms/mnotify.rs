//! mNotify SMS adapter
//!
//! Sends through mNotify's quick-SMS endpoint: the API key goes in the
//! query string, everything else in a JSON body.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use fs_core::domain::entities::sms::{ProviderId, SendResult};
use fs_core::errors::SmsError;
use fs_core::services::sms::SmsTransport;
use fs_shared::config::MnotifyConfig;
use fs_shared::phone::{mask_phone_number, normalize_phone_number};

use super::response::{parse_mnotify_response, request_error, ParsedResponse};
use crate::InfrastructureError;

/// Request body of the quick-SMS endpoint
#[derive(Debug, Serialize)]
struct QuickSmsRequest<'a> {
    recipient: [&'a str; 1],
    sender: &'a str,
    message: &'a str,
    is_schedule: bool,
    schedule_date: &'a str,
}

/// mNotify gateway adapter
pub struct MnotifySmsService {
    client: reqwest::Client,
    config: MnotifyConfig,
    timeout: Duration,
}

impl MnotifySmsService {
    /// Create a new adapter whose requests give up after `timeout`
    pub fn new(config: MnotifyConfig, timeout: Duration) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(
            base_url = %config.base_url,
            sender_id = %config.sender_id,
            timeout_secs = timeout.as_secs(),
            "mNotify SMS service initialized"
        );

        Ok(Self {
            client,
            config,
            timeout,
        })
    }

    pub fn config(&self) -> &MnotifyConfig {
        &self.config
    }
}

/// Locally generated id for successes that carry none
fn fallback_message_id() -> String {
    format!("mnotify_{}", chrono::Utc::now().timestamp_millis())
}

#[async_trait]
impl SmsTransport for MnotifySmsService {
    fn provider(&self) -> ProviderId {
        ProviderId::Mnotify
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
        let sender = sender_id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.config.sender_id.as_str());
        let masked = mask_phone_number(&destination);

        debug!(
            provider = "mnotify",
            phone = %masked,
            sender = %sender,
            message_length = message.len(),
            "Sending SMS via mNotify"
        );

        let body = QuickSmsRequest {
            recipient: [destination.as_str()],
            sender,
            message,
            is_schedule: false,
            schedule_date: "",
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .query(&[("key", self.config.api_key.as_str())])
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| request_error(ProviderId::Mnotify, e, self.timeout))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| request_error(ProviderId::Mnotify, e, self.timeout))?;

        if !status.is_success() {
            error!(
                provider = "mnotify",
                phone = %masked,
                status = status.as_u16(),
                body = %text,
                "mNotify SMS API error"
            );
            return Err(SmsError::transport(
                ProviderId::Mnotify,
                Some(status.as_u16()),
                text,
            ));
        }

        let json: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            error!(provider = "mnotify", body = %text, error = %e, "Unreadable mNotify response");
            SmsError::provider_encoded(
                ProviderId::Mnotify,
                None,
                format!("Invalid mNotify response: {}", e),
            )
        })?;

        debug!(provider = "mnotify", response = %json, "mNotify SMS response");

        match parse_mnotify_response(&json) {
            ParsedResponse::Success { message_id } => {
                let message_id = message_id.unwrap_or_else(fallback_message_id);
                Ok(SendResult::sent(ProviderId::Mnotify, Some(message_id), json))
            }
            ParsedResponse::Failure { code, message } => {
                error!(
                    provider = "mnotify",
                    phone = %masked,
                    code = ?code,
                    error = %message,
                    "mNotify rejected SMS"
                );
                Err(SmsError::provider_encoded(ProviderId::Mnotify, code, message))
            }
        }
    }

    async fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
