//! Unit tests for mock SMS service

use fs_core::domain::entities::sms::ProviderId;
use fs_core::errors::SmsError;
use fs_core::services::sms::SmsTransport;

use crate::sms::MockSmsService;

#[tokio::test]
async fn test_mock_sms_send_success() {
    let service = MockSmsService::new(ProviderId::Nalo);
    let result = service.send("0241234567", "Test message", None).await.unwrap();

    assert_eq!(result.provider, ProviderId::Nalo);
    assert!(result.message_id.unwrap().starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
}

#[tokio::test]
async fn test_mock_sms_invalid_phone() {
    let service = MockSmsService::new(ProviderId::Mnotify);
    let result = service.send("12345", "Test message", None).await;

    assert!(matches!(result, Err(SmsError::InvalidPhoneFormat { .. })));
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_sms_simulate_failure() {
    let service = MockSmsService::new(ProviderId::Nalo);
    service.set_simulate_failure(true);

    let result = service.send("0241234567", "Test message", None).await;
    assert!(matches!(result, Err(SmsError::Transport { .. })));
    assert!(!service.is_available().await);
}

#[tokio::test]
async fn test_mock_sms_counter() {
    let service = MockSmsService::new(ProviderId::Nalo);

    for i in 1..=3 {
        let _ = service
            .send("0241234567", &format!("Message {}", i), None)
            .await;
        assert_eq!(service.get_message_count(), i);
    }

    service.reset_counter();
    assert_eq!(service.get_message_count(), 0);
}
