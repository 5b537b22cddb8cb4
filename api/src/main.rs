use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use fs_api::telemetry::init_tracing;
use fs_api::{create_app, AppState};
use fs_core::services::sms::{DispatchConfig, ProviderResolver, SmsDispatcher};
use fs_infra::settings::JsonSettingsStore;
use fs_infra::sms::create_transports;
use fs_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("tracing already initialised: {}", e);
    }

    tracing::info!(
        environment = %config.environment,
        mode = ?config.sms.mode,
        "Starting Fuel Station SMS API"
    );

    let transports = create_transports(&config.sms)
        .await
        .context("failed to create SMS transports")?;

    let store = Arc::new(JsonSettingsStore::new(&config.sms.settings_path));
    let dispatch_config = DispatchConfig::from_sms_config(&config.sms);
    let resolver = ProviderResolver::new(
        store.clone(),
        store,
        dispatch_config.default_provider,
        dispatch_config.sender_defaults.clone(),
    );
    let dispatcher = Arc::new(SmsDispatcher::new(transports, resolver, dispatch_config));
    let app_state = web::Data::new(AppState::new(dispatcher));

    let bind_address = config.server.bind_address();
    let environment = config.environment;
    let server_config = config.server.clone();

    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), environment, &server_config)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")?;

    Ok(())
}
