#![allow(dead_code)]

//! Shared wiring for the route tests: mock transports for both gateways and
//! an in-memory settings store.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use fs_api::AppState;
use fs_core::domain::entities::ProviderId;
use fs_core::repositories::InMemorySettingsRepository;
use fs_core::services::sms::{DispatchConfig, ProviderResolver, SmsDispatcher, TransportSet};
use fs_infra::sms::MockSmsService;

pub type TestState = AppState<InMemorySettingsRepository, InMemorySettingsRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub settings: Arc<InMemorySettingsRepository>,
    pub nalo: MockSmsService,
    pub mnotify: MockSmsService,
}

pub fn context() -> TestContext {
    let settings = Arc::new(InMemorySettingsRepository::new());
    let nalo = MockSmsService::new(ProviderId::Nalo);
    let mnotify = MockSmsService::new(ProviderId::Mnotify);

    let transports = TransportSet::new()
        .with(Arc::new(nalo.clone()))
        .with(Arc::new(mnotify.clone()));
    let config = DispatchConfig::default().with_bulk_spacing(Duration::ZERO);
    let resolver = ProviderResolver::new(
        settings.clone(),
        settings.clone(),
        config.default_provider,
        config.sender_defaults.clone(),
    );
    let dispatcher = Arc::new(SmsDispatcher::new(transports, resolver, config));

    TestContext {
        state: web::Data::new(AppState::new(dispatcher)),
        settings,
        nalo,
        mnotify,
    }
}
