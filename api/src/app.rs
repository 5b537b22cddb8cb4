//! Application factory
//!
//! Builds the Actix-web application around an already wired [`AppState`].

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};
use fs_shared::{error_codes, ApiResponse, Environment, ServerConfig};

use crate::handlers::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::health::health_check;
use crate::routes::sms::{bulk, notifications, send};
use crate::routes::AppState;

/// Largest accepted JSON body; a full bulk campaign fits comfortably
const JSON_LIMIT: usize = 512 * 1024;

/// Create and configure the application with all dependencies
pub fn create_app<P, C>(
    app_state: web::Data<AppState<P, C>>,
    environment: Environment,
    server: &ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: ProviderSettingsRepository + 'static,
    C: CompanySenderRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(JSON_LIMIT)
                .error_handler(json_error_handler),
        )
        // TracingLogger is outermost so every request, CORS rejections
        // included, gets a request id and a span
        .wrap(create_cors(environment, server))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<P, C>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/sms")
                        .route("/send", web::post().to(send::send_sms::<P, C>))
                        .route(
                            "/transaction",
                            web::post().to(notifications::send_transaction_sms::<P, C>),
                        )
                        .route(
                            "/payment",
                            web::post().to(notifications::send_payment_sms::<P, C>),
                        )
                        .route("/bulk", web::post().to(bulk::send_bulk_sms::<P, C>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Fuel Station SMS API v1",
        "endpoints": {
            "health": "/health",
            "sms": {
                "send": {
                    "path": "/api/v1/sms/send",
                    "method": "POST",
                    "request_body": {
                        "phone": "string (Ghana mobile number)",
                        "message": "string",
                        "provider": "optional, 'nalo' or 'mnotify'",
                        "sender_id": "optional string (max 11 chars)",
                        "company_id": "optional string"
                    }
                },
                "transaction": {
                    "path": "/api/v1/sms/transaction",
                    "method": "POST",
                    "request_body": {
                        "transaction": "object",
                        "phone_number": "string",
                        "recipient_type": "'driver' or 'company-manager'",
                        "company_id": "optional string"
                    }
                },
                "payment": {
                    "path": "/api/v1/sms/payment",
                    "method": "POST",
                    "request_body": {
                        "transaction": "object",
                        "phone_number": "string",
                        "company_id": "optional string"
                    }
                },
                "bulk": {
                    "path": "/api/v1/sms/bulk",
                    "method": "POST",
                    "request_body": {
                        "recipients": "array of {phone, message, id} (1 to 1000)",
                        "provider": "optional, 'nalo' or 'mnotify'",
                        "sender_id": "optional string",
                        "company_id": "optional string"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
