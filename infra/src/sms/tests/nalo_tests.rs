//! Tests for the Nalo adapter against a local mock server

use httpmock::prelude::*;
use std::time::Duration;

use fs_core::domain::entities::sms::ProviderId;
use fs_core::errors::SmsError;
use fs_core::services::sms::SmsTransport;
use fs_shared::config::NaloConfig;

use crate::sms::NaloSmsService;

fn service(server: &MockServer, timeout: Duration) -> NaloSmsService {
    let config = NaloConfig {
        base_url: server.url("/send-message/"),
        username: "station".to_string(),
        password: "s3cret".to_string(),
        source: "KrapaShell".to_string(),
    };
    NaloSmsService::new(config, timeout).unwrap()
}

#[tokio::test]
async fn test_query_string_wire_format() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/send-message/")
                .query_param("username", "station")
                .query_param("password", "s3cret")
                .query_param("type", "0")
                .query_param("destination", "233241234567")
                .query_param("dlr", "1")
                .query_param("source", "KrapaShell")
                .query_param("message", "Hello & welcome");
            then.status(200).body("1000:MSG123");
        })
        .await;

    let result = service(&server, Duration::from_secs(5))
        .send("0241234567", "Hello & welcome", None)
        .await
        .unwrap();

    mock.assert_hits_async(1).await;
    assert!(result.success);
    assert_eq!(result.provider, ProviderId::Nalo);
    assert_eq!(result.message_id.as_deref(), Some("MSG123"));
    assert_eq!(result.raw, serde_json::json!("1000:MSG123"));
}

#[tokio::test]
async fn test_custom_sender_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).query_param("source", "StarOil");
            then.status(200).body("1000:X1");
        })
        .await;

    service(&server, Duration::from_secs(5))
        .send("+233 24 123 4567", "Hi", Some("StarOil"))
        .await
        .unwrap();

    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_invalid_phone_never_hits_network() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).body("1000:X");
        })
        .await;

    let err = service(&server, Duration::from_secs(5))
        .send("123", "Hi", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SmsError::InvalidPhoneFormat {
            phone: "123".to_string()
        }
    );
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_encoded_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).body("1709:User validation failed");
        })
        .await;

    let err = service(&server, Duration::from_secs(5))
        .send("0241234567", "Hi", None)
        .await
        .unwrap_err();

    assert_eq!(err.provider_code(), Some(1709));
    assert_eq!(err.http_status(), None);
    assert!(matches!(err, SmsError::ProviderEncoded { .. }));
}

#[tokio::test]
async fn test_non_2xx_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(500).body("Internal Server Error");
        })
        .await;

    let err = service(&server, Duration::from_secs(5))
        .send("0241234567", "Hi", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SmsError::Transport {
            provider: ProviderId::Nalo,
            status: Some(500),
            body: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200)
                .body("1000:late")
                .delay(Duration::from_millis(500));
        })
        .await;

    let err = service(&server, Duration::from_millis(100))
        .send("0241234567", "Hi", None)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_availability_requires_credentials() {
    let server = MockServer::start_async().await;
    assert!(service(&server, Duration::from_secs(5)).is_available().await);

    let unconfigured = NaloSmsService::new(NaloConfig::default(), Duration::from_secs(5)).unwrap();
    assert!(!unconfigured.is_available().await);
}
