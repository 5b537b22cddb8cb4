//! Dispatch façade: the single entry point for outbound SMS.
//!
//! Single sends resolve provider and sender per call and propagate the
//! transport error unchanged. Bulk campaigns resolve both once, then send
//! strictly one recipient at a time with a fixed pause between sends, turning
//! every failure into a per-recipient outcome.

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;

use fs_shared::phone::mask_phone_number;

use crate::domain::entities::notification::{
    OrderDetails, OrderStatusChange, RecipientType, TransactionNotice,
};
use crate::domain::entities::sms::{
    BulkOptions, BulkProgress, BulkRecipient, BulkResult, PerRecipientOutcome, ProviderId,
    SendRequest, SendResult,
};
use crate::errors::SmsResult;
use crate::repositories::{CompanySenderRepository, ProviderSettingsRepository};

use super::config::DispatchConfig;
use super::resolver::ProviderResolver;
use super::templates;
use super::traits::TransportSet;

pub struct SmsDispatcher<P, C>
where
    P: ProviderSettingsRepository,
    C: CompanySenderRepository,
{
    transports: TransportSet,
    resolver: ProviderResolver<P, C>,
    config: DispatchConfig,
}

impl<P, C> SmsDispatcher<P, C>
where
    P: ProviderSettingsRepository,
    C: CompanySenderRepository,
{
    pub fn new(
        transports: TransportSet,
        resolver: ProviderResolver<P, C>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            transports,
            resolver,
            config,
        }
    }

    pub fn resolver(&self) -> &ProviderResolver<P, C> {
        &self.resolver
    }

    pub fn transports(&self) -> &TransportSet {
        &self.transports
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Send one message.
    ///
    /// The provider comes from the request or the settings store. An explicit
    /// sender id wins; otherwise a company override is looked up when a
    /// company is given, and the transport default applies when not.
    pub async fn send_sms(&self, request: SendRequest) -> SmsResult<SendResult> {
        let SendRequest {
            phone_number,
            message,
            provider,
            sender_id,
            company_id,
        } = request;

        let provider = match provider {
            Some(provider) => provider,
            None => self.resolver.get_active_provider().await,
        };

        let sender_id = match (sender_id, company_id.as_deref()) {
            (Some(sender_id), _) => Some(sender_id),
            (None, Some(company_id)) => Some(
                self.resolver
                    .get_company_sender_id(Some(company_id), Some(provider))
                    .await,
            ),
            (None, None) => None,
        };

        self.dispatch(provider, &phone_number, &message, sender_id.as_deref())
            .await
    }

    async fn dispatch(
        &self,
        provider: ProviderId,
        phone: &str,
        message: &str,
        sender_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let transport = self.transports.get(provider)?;
        let masked = mask_phone_number(phone);

        match transport.send(phone, message, sender_id).await {
            Ok(result) => {
                tracing::info!(
                    provider = %provider,
                    phone = %masked,
                    message_id = ?result.message_id,
                    "SMS sent"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::error!(
                    provider = %provider,
                    phone = %masked,
                    error = %e,
                    "SMS send failed"
                );
                Err(e)
            }
        }
    }

    /// Provider and sender for a whole campaign, resolved once up front
    async fn resolve_campaign(&self, options: &BulkOptions) -> (ProviderId, String) {
        let provider = match options.provider {
            Some(provider) => provider,
            None => self.resolver.get_active_provider().await,
        };
        let sender_id = match &options.sender_id {
            Some(sender_id) => sender_id.clone(),
            None => {
                self.resolver
                    .get_company_sender_id(options.company_id.as_deref(), Some(provider))
                    .await
            }
        };
        (provider, sender_id)
    }

    /// Lazily run a bulk campaign, yielding one event per finished recipient.
    ///
    /// Recipients are processed in input order, one at a time. Every send
    /// except the first waits `bulk_spacing` first, so N recipients see N-1
    /// pauses whatever the individual outcomes. The stream is finite and
    /// cannot be restarted; dropping it stops the campaign.
    pub async fn bulk_stream(
        &self,
        recipients: Vec<BulkRecipient>,
        options: BulkOptions,
    ) -> BoxStream<'_, BulkProgress> {
        let (provider, sender_id) = self.resolve_campaign(&options).await;
        let total = recipients.len();
        let spacing = self.config.bulk_spacing;

        tracing::info!(
            total = total,
            provider = %provider,
            sender_id = %sender_id,
            "Starting bulk SMS campaign"
        );

        let state = (recipients.into_iter().enumerate(), sender_id);
        stream::unfold(state, move |(mut pending, sender_id)| async move {
            let (index, recipient) = pending.next()?;
            if index > 0 {
                tokio::time::sleep(spacing).await;
            }

            let outcome = match self
                .dispatch(provider, &recipient.phone, &recipient.message, Some(&sender_id))
                .await
            {
                Ok(result) => PerRecipientOutcome::sent(&recipient, result.message_id),
                Err(e) => PerRecipientOutcome::failed(&recipient, e.to_string()),
            };

            let progress = BulkProgress {
                current: index + 1,
                total,
                outcome,
            };
            Some((progress, (pending, sender_id)))
        })
        .boxed()
    }

    /// Run a bulk campaign to completion
    pub async fn send_bulk_sms(
        &self,
        recipients: Vec<BulkRecipient>,
        options: BulkOptions,
    ) -> BulkResult {
        let mut result = BulkResult::new(recipients.len());
        let mut events = self.bulk_stream(recipients, options).await;
        while let Some(progress) = events.next().await {
            result.record(progress.outcome);
        }
        log_campaign_summary(&result);
        result
    }

    /// Run a bulk campaign to completion, forwarding every event to `progress`.
    ///
    /// A dropped receiver does not stop the campaign.
    pub async fn send_bulk_sms_with_progress(
        &self,
        recipients: Vec<BulkRecipient>,
        options: BulkOptions,
        progress: mpsc::Sender<BulkProgress>,
    ) -> BulkResult {
        let mut result = BulkResult::new(recipients.len());
        let mut forward = true;
        let mut events = self.bulk_stream(recipients, options).await;
        while let Some(event) = events.next().await {
            if forward && progress.send(event.clone()).await.is_err() {
                tracing::debug!("Bulk progress receiver dropped, continuing without progress");
                forward = false;
            }
            result.record(event.outcome);
        }
        log_campaign_summary(&result);
        result
    }

    pub async fn send_otp(
        &self,
        phone: &str,
        code: &str,
        provider: Option<ProviderId>,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        self.send_sms(notification(phone, templates::otp(code), provider, company_id))
            .await
    }

    pub async fn send_setup_otp(
        &self,
        phone: &str,
        code: &str,
        company_count: usize,
        provider: Option<ProviderId>,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let message = templates::setup_otp(code, company_count);
        self.send_sms(notification(phone, message, provider, company_id))
            .await
    }

    pub async fn send_order_confirmation(
        &self,
        phone: &str,
        order: &OrderDetails,
        provider: Option<ProviderId>,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let message = templates::order_confirmation(order, &self.config.templates);
        self.send_sms(notification(phone, message, provider, company_id))
            .await
    }

    pub async fn send_order_notification_to_company(
        &self,
        phone: &str,
        order: &OrderDetails,
        provider: Option<ProviderId>,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let message = templates::company_order_notification(order, &self.config.templates);
        self.send_sms(notification(phone, message, provider, company_id))
            .await
    }

    pub async fn send_order_status_update(
        &self,
        phone: &str,
        change: &OrderStatusChange,
        provider: Option<ProviderId>,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let message = templates::order_status_update(change);
        self.send_sms(notification(phone, message, provider, company_id))
            .await
    }

    /// Receipt for a driver or notice for a company manager
    pub async fn send_transaction_notification(
        &self,
        phone: &str,
        transaction: &TransactionNotice,
        recipient: RecipientType,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let message = match recipient {
            RecipientType::Driver => {
                templates::driver_transaction_receipt(transaction, &self.config.templates)
            }
            RecipientType::CompanyManager => {
                templates::manager_transaction_notice(transaction, &self.config.templates)
            }
        };
        self.send_sms(notification(phone, message, None, company_id))
            .await
    }

    pub async fn send_payment_confirmation(
        &self,
        phone: &str,
        transaction: &TransactionNotice,
        company_id: Option<&str>,
    ) -> SmsResult<SendResult> {
        let message = templates::payment_confirmation(transaction, &self.config.templates);
        self.send_sms(notification(phone, message, None, company_id))
            .await
    }
}

fn notification(
    phone: &str,
    message: String,
    provider: Option<ProviderId>,
    company_id: Option<&str>,
) -> SendRequest {
    SendRequest {
        phone_number: phone.to_string(),
        message,
        provider,
        sender_id: None,
        company_id: company_id.map(str::to_string),
    }
}

fn log_campaign_summary(result: &BulkResult) {
    tracing::info!(
        total = result.total,
        sent = result.sent,
        failed = result.failed,
        "Bulk SMS campaign completed"
    );
}
