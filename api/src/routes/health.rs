use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use fs_core::repositories::{CompanySenderRepository, ProviderSettingsRepository};
use fs_shared::{HealthResponse, HealthStatus, ServiceHealth};

use super::AppState;

/// Handler for GET /health
///
/// Reports each configured gateway as a service. Responds 503 only when no
/// gateway is usable.
pub async fn health_check<P, C>(state: web::Data<AppState<P, C>>) -> HttpResponse
where
    P: ProviderSettingsRepository + 'static,
    C: CompanySenderRepository + 'static,
{
    let transports = state.dispatcher.transports();
    let mut services = HashMap::new();

    for provider in transports.providers() {
        let health = match transports.get(provider) {
            Ok(transport) if transport.is_available().await => ServiceHealth::healthy(),
            Ok(_) => ServiceHealth::unhealthy("credentials missing or gateway disabled"),
            Err(e) => ServiceHealth::unhealthy(e.to_string()),
        };
        services.insert(format!("sms_{}", provider), health);
    }

    let response = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}
