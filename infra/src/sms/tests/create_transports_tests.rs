//! Tests for transport construction from configuration

use fs_core::domain::entities::sms::ProviderId;
use fs_shared::config::{SmsConfig, SmsMode};

use crate::sms::create_transports;

#[tokio::test]
async fn test_mock_mode_registers_every_provider() {
    let config = SmsConfig {
        mode: SmsMode::Mock,
        ..SmsConfig::default()
    };

    let transports = create_transports(&config).await.unwrap();

    assert_eq!(transports.providers(), vec![ProviderId::Nalo, ProviderId::Mnotify]);
    let result = transports
        .get(ProviderId::Mnotify)
        .unwrap()
        .send("0241234567", "Hello", None)
        .await
        .unwrap();
    assert!(result.message_id.unwrap().starts_with("mock_"));
}

#[tokio::test]
async fn test_live_mode_builds_gateway_adapters() {
    let transports = create_transports(&SmsConfig::default()).await.unwrap();

    assert_eq!(transports.len(), 2);
    // No credentials configured
    assert!(!transports.get(ProviderId::Nalo).unwrap().is_available().await);
    assert!(!transports.get(ProviderId::Mnotify).unwrap().is_available().await);
}
