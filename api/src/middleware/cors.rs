//! CORS middleware configuration.
//!
//! Development accepts any origin so local dashboards and tools can call the
//! API. Staging and production only accept the origins listed in
//! `ServerConfig::allowed_origins`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use fs_shared::{Environment, ServerConfig};

/// Preflight cache lifetime in seconds
const MAX_AGE: usize = 3600;

pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_development() {
        create_development_cors()
    } else {
        create_restricted_cors(&server.allowed_origins)
    }
}

fn create_development_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(MAX_AGE)
}

fn create_restricted_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(MAX_AGE);

    for origin in allowed_origins.iter().map(|o| o.trim()).filter(|o| !o.is_empty()) {
        tracing::info!(origin = origin, "Adding allowed CORS origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}
