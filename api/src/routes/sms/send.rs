use actix_web::{web, HttpResponse};
use tracing_actix_web::RequestId;
use validator::Validate;

use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};
use fs_shared::phone::mask_phone_number;
use fs_shared::ApiResponse;

use crate::dto::SendSmsRequest;
use crate::handlers::{sms_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/sms/send
///
/// Sends one message through the requested provider, or the active one when
/// `provider` is omitted.
///
/// # Request Body
///
/// ```json
/// {
///     "phone": "0241234567",
///     "message": "Your fuel coupon is ready",
///     "provider": "mnotify",
///     "sender_id": "StarOil",
///     "company_id": "star-oil"
/// }
/// ```
///
/// # Responses
/// - 200 with the `SendResult`
/// - 400 on invalid phone, message or provider
/// - 502 when the gateway rejects or cannot be reached, 504 on timeout
pub async fn send_sms<P, C>(
    state: web::Data<AppState<P, C>>,
    request_id: RequestId,
    request: web::Json<SendSmsRequest>,
) -> HttpResponse
where
    P: ProviderSettingsRepository + 'static,
    C: CompanySenderRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &request_id);
    }

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&request.phone),
        "Processing send SMS request"
    );

    let send_request = match request.into_send_request() {
        Ok(send_request) => send_request,
        Err(e) => return sms_error_response(&e, &request_id),
    };

    match state.dispatcher.send_sms(send_request).await {
        Ok(result) => HttpResponse::Ok()
            .json(ApiResponse::success(result).with_request_id(request_id.to_string())),
        Err(e) => sms_error_response(&e, &request_id),
    }
}
