//! Nalo Solutions SMS adapter
//!
//! Sends through Nalo's query-string API: credentials, destination, sender
//! and message all travel as GET parameters. Responses are plain text in the
//! `<code>:<id-or-reason>` form, see [`parse_nalo_response`].

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};

use fs_core::domain::entities::sms::{ProviderId, SendResult};
use fs_core::errors::SmsError;
use fs_core::services::sms::SmsTransport;
use fs_shared::config::NaloConfig;
use fs_shared::phone::{mask_phone_number, normalize_phone_number};

use super::response::{parse_nalo_response, request_error, ParsedResponse};
use crate::InfrastructureError;

/// Nalo gateway adapter
pub struct NaloSmsService {
    client: reqwest::Client,
    config: NaloConfig,
    timeout: Duration,
}

impl NaloSmsService {
    /// Create a new adapter whose requests give up after `timeout`
    pub fn new(config: NaloConfig, timeout: Duration) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(
            base_url = %config.base_url,
            source = %config.source,
            timeout_secs = timeout.as_secs(),
            "Nalo SMS service initialized"
        );

        Ok(Self {
            client,
            config,
            timeout,
        })
    }

    pub fn config(&self) -> &NaloConfig {
        &self.config
    }

    fn query<'a>(&'a self, destination: &'a str, source: &'a str, message: &'a str) -> [(&'static str, &'a str); 7] {
        [
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
            ("type", "0"),
            ("destination", destination),
            ("dlr", "1"),
            ("source", source),
            ("message", message),
        ]
    }
}

#[async_trait]
impl SmsTransport for NaloSmsService {
    fn provider(&self) -> ProviderId {
        ProviderId::Nalo
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
        let source = sender_id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.config.source.as_str());
        let masked = mask_phone_number(&destination);

        debug!(
            provider = "nalo",
            phone = %masked,
            source = %source,
            message_length = message.len(),
            "Sending SMS via Nalo"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query(&destination, source, message))
            .send()
            .await
            .map_err(|e| request_error(ProviderId::Nalo, e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| request_error(ProviderId::Nalo, e, self.timeout))?;

        if !status.is_success() {
            error!(
                provider = "nalo",
                phone = %masked,
                status = status.as_u16(),
                body = %body,
                "Nalo SMS API error"
            );
            return Err(SmsError::transport(
                ProviderId::Nalo,
                Some(status.as_u16()),
                body,
            ));
        }

        debug!(provider = "nalo", body = %body, "Nalo SMS response");

        match parse_nalo_response(&body) {
            ParsedResponse::Success { message_id } => Ok(SendResult::sent(
                ProviderId::Nalo,
                message_id,
                serde_json::Value::String(body),
            )),
            ParsedResponse::Failure { code, message } => {
                error!(
                    provider = "nalo",
                    phone = %masked,
                    code = ?code,
                    error = %message,
                    "Nalo rejected SMS"
                );
                Err(SmsError::provider_encoded(ProviderId::Nalo, code, message))
            }
        }
    }

    async fn is_available(&self) -> bool {
        !self.config.username.is_empty() && !self.config.password.is_empty()
    }
}
