use actix_web::{web, HttpResponse};
use tracing_actix_web::RequestId;
use validator::Validate;

use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};
use fs_shared::ApiResponse;

use crate::dto::BulkSmsRequest;
use crate::handlers::{sms_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/sms/bulk
///
/// Runs the whole campaign before responding; with the default spacing a
/// campaign of N recipients takes at least N-1 seconds. Individual failures
/// are reported in `details` and never fail the request.
pub async fn send_bulk_sms<P, C>(
    state: web::Data<AppState<P, C>>,
    request_id: RequestId,
    request: web::Json<BulkSmsRequest>,
) -> HttpResponse
where
    P: ProviderSettingsRepository + 'static,
    C: CompanySenderRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &request_id);
    }

    let (recipients, options) = match request.into_parts() {
        Ok(parts) => parts,
        Err(e) => return sms_error_response(&e, &request_id),
    };

    tracing::info!(
        request_id = %request_id,
        recipients = recipients.len(),
        "Processing bulk SMS request"
    );

    let result = state.dispatcher.send_bulk_sms(recipients, options).await;
    HttpResponse::Ok().json(ApiResponse::success(result).with_request_id(request_id.to_string()))
}
