//! Transaction and payment notifications for fuel sales

use actix_web::{web, HttpResponse};
use tracing_actix_web::RequestId;
use validator::Validate;

use fs_core::domain::entities::RecipientType;
use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};
use fs_shared::phone::mask_phone_number;
use fs_shared::ApiResponse;

use crate::dto::{PaymentSmsRequest, TransactionSmsRequest};
use crate::handlers::{bad_request, sms_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/sms/transaction
///
/// Sends a receipt to a driver or a sale notice to a company manager:
///
/// ```json
/// {
///     "transaction": { "driverName": "Kofi", "cost": 520.5, "quantity": 40 },
///     "phone_number": "0241234567",
///     "recipient_type": "driver",
///     "company_id": "star-oil"
/// }
/// ```
pub async fn send_transaction_sms<P, C>(
    state: web::Data<AppState<P, C>>,
    request_id: RequestId,
    request: web::Json<TransactionSmsRequest>,
) -> HttpResponse
where
    P: ProviderSettingsRepository + 'static,
    C: CompanySenderRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &request_id);
    }

    let (transaction, phone, recipient_type) =
        match (request.transaction, request.phone_number, request.recipient_type) {
            (Some(transaction), Some(phone), Some(recipient_type)) => {
                (transaction, phone, recipient_type)
            }
            _ => {
                return bad_request(
                    "Missing required fields: transaction, phone_number, recipient_type",
                    &request_id,
                )
            }
        };

    let recipient = match recipient_type.as_str() {
        "driver" => RecipientType::Driver,
        "company-manager" => RecipientType::CompanyManager,
        other => {
            return bad_request(
                format!("Invalid recipient type: {}. Use driver or company-manager", other),
                &request_id,
            )
        }
    };

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&phone),
        recipient = %recipient,
        "Sending transaction notification"
    );

    match state
        .dispatcher
        .send_transaction_notification(&phone, &transaction, recipient, request.company_id.as_deref())
        .await
    {
        Ok(result) => HttpResponse::Ok()
            .json(ApiResponse::success(result).with_request_id(request_id.to_string())),
        Err(e) => sms_error_response(&e, &request_id),
    }
}

/// Handler for POST /api/v1/sms/payment
pub async fn send_payment_sms<P, C>(
    state: web::Data<AppState<P, C>>,
    request_id: RequestId,
    request: web::Json<PaymentSmsRequest>,
) -> HttpResponse
where
    P: ProviderSettingsRepository + 'static,
    C: CompanySenderRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &request_id);
    }

    let (transaction, phone) = match (request.transaction, request.phone_number) {
        (Some(transaction), Some(phone)) => (transaction, phone),
        _ => {
            return bad_request(
                "Missing required fields: transaction, phone_number",
                &request_id,
            )
        }
    };

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&phone),
        "Sending payment confirmation"
    );

    match state
        .dispatcher
        .send_payment_confirmation(&phone, &transaction, request.company_id.as_deref())
        .await
    {
        Ok(result) => HttpResponse::Ok()
            .json(ApiResponse::success(result).with_request_id(request_id.to_string())),
        Err(e) => sms_error_response(&e, &request_id),
    }
}
