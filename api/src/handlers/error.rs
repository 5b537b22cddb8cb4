//! Mapping of dispatch and request errors onto HTTP responses.
//!
//! Every error body uses the shared [`ApiResponse`] envelope with a
//! machine-readable code from [`error_codes`].

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use tracing_actix_web::RequestId;
use validator::ValidationErrors;

use fs_core::errors::SmsError;
use fs_shared::{error_codes, ApiResponse};

/// Status code and error code for a dispatch failure
pub fn classify(error: &SmsError) -> (StatusCode, &'static str) {
    match error {
        SmsError::InvalidPhoneFormat { .. } => (StatusCode::BAD_REQUEST, error_codes::PHONE_INVALID),
        SmsError::UnsupportedProvider(_) => {
            (StatusCode::BAD_REQUEST, error_codes::PROVIDER_UNSUPPORTED)
        }
        SmsError::ProviderEncoded { .. } => (StatusCode::BAD_GATEWAY, error_codes::SMS_PROVIDER_ERROR),
        SmsError::Transport { .. } => (StatusCode::BAD_GATEWAY, error_codes::SMS_TRANSPORT_ERROR),
        SmsError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, error_codes::SMS_TIMEOUT),
        SmsError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
    }
}

pub fn sms_error_response(error: &SmsError, request_id: &RequestId) -> HttpResponse {
    let (status, code) = classify(error);
    if status.is_server_error() {
        tracing::error!(request_id = %request_id, code = code, error = %error, "SMS request failed");
    } else {
        tracing::warn!(request_id = %request_id, code = code, error = %error, "SMS request rejected");
    }

    HttpResponse::build(status).json(
        ApiResponse::<()>::error(code, error.to_string()).with_request_id(request_id.to_string()),
    )
}

/// 400 listing the first message of each invalid field
pub fn validation_error_response(errors: &ValidationErrors, request_id: &RequestId) -> HttpResponse {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let detail = errors
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| String::from("is invalid"));
            format!("{}: {}", field, detail)
        })
        .collect();
    messages.sort();

    tracing::warn!(request_id = %request_id, errors = ?messages, "Request validation failed");

    HttpResponse::BadRequest().json(
        ApiResponse::<()>::error(error_codes::VALIDATION_ERROR, messages.join("; "))
            .with_request_id(request_id.to_string()),
    )
}

pub fn bad_request(message: impl Into<String>, request_id: &RequestId) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ApiResponse::<()>::error(error_codes::BAD_REQUEST, message)
            .with_request_id(request_id.to_string()),
    )
}

/// Malformed or mistyped JSON bodies get the standard envelope too
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let mut body = ApiResponse::<()>::error(error_codes::BAD_REQUEST, err.to_string());
    if let Some(request_id) = req.extensions().get::<RequestId>() {
        body = body.with_request_id(request_id.to_string());
    }

    tracing::debug!(error = %err, "Rejected request body");
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_core::domain::entities::ProviderId;

    #[test]
    fn test_classify_gateway_errors() {
        let encoded = SmsError::provider_encoded(ProviderId::Nalo, Some(1702), "Invalid URL");
        assert_eq!(
            classify(&encoded),
            (StatusCode::BAD_GATEWAY, error_codes::SMS_PROVIDER_ERROR)
        );

        let transport = SmsError::transport(ProviderId::Mnotify, Some(500), "oops");
        assert_eq!(
            classify(&transport),
            (StatusCode::BAD_GATEWAY, error_codes::SMS_TRANSPORT_ERROR)
        );

        let timeout = SmsError::Timeout {
            provider: ProviderId::Nalo,
            seconds: 30,
        };
        assert_eq!(classify(&timeout).0, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_classify_client_errors() {
        let invalid = SmsError::InvalidPhoneFormat {
            phone: "123".to_string(),
        };
        assert_eq!(classify(&invalid), (StatusCode::BAD_REQUEST, error_codes::PHONE_INVALID));
        assert_eq!(
            classify(&SmsError::UnsupportedProvider("twilio".to_string())).1,
            error_codes::PROVIDER_UNSUPPORTED
        );
        assert_eq!(
            classify(&SmsError::Internal("boom".to_string())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
