//! Tests for the mNotify adapter against a local mock server

use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

use fs_core::domain::entities::sms::ProviderId;
use fs_core::errors::SmsError;
use fs_core::services::sms::SmsTransport;
use fs_shared::config::MnotifyConfig;

use crate::sms::MnotifySmsService;

fn service(server: &MockServer) -> MnotifySmsService {
    let config = MnotifyConfig {
        base_url: server.url("/api/sms/quick"),
        api_key: "test-key".to_string(),
        sender_id: "KrapaShell".to_string(),
    };
    MnotifySmsService::new(config, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_json_wire_format() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/sms/quick")
                .query_param("key", "test-key")
                .header("content-type", "application/json")
                .json_body(json!({
                    "recipient": ["233241234567"],
                    "sender": "StarOil",
                    "message": "Hello",
                    "is_schedule": false,
                    "schedule_date": ""
                }));
            then.status(200)
                .json_body(json!({"status": "success", "message_id": "abc"}));
        })
        .await;

    let result = service(&server)
        .send("0241234567", "Hello", Some("StarOil"))
        .await
        .unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(result.provider, ProviderId::Mnotify);
    assert_eq!(result.message_id.as_deref(), Some("abc"));
    assert_eq!(result.raw["status"], "success");
}

#[tokio::test]
async fn test_default_sender_used() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).body_contains("\"sender\":\"KrapaShell\"");
            then.status(200).json_body(json!({"code": "200", "id": "x9"}));
        })
        .await;

    let result = service(&server).send("241234567", "Hello", None).await.unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(result.message_id.as_deref(), Some("x9"));
}

#[tokio::test]
async fn test_success_without_id_gets_fallback_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({"code": 200}));
        })
        .await;

    let result = service(&server).send("0241234567", "Hello", None).await.unwrap();

    let id = result.message_id.unwrap();
    assert!(id.starts_with("mnotify_"));
    assert!(id["mnotify_".len()..].parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_encoded_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200)
                .json_body(json!({"status": "error", "message": "bad sender"}));
        })
        .await;

    let err = service(&server).send("0241234567", "Hello", None).await.unwrap_err();

    assert_eq!(
        err,
        SmsError::ProviderEncoded {
            provider: ProviderId::Mnotify,
            code: None,
            message: "bad sender".to_string(),
        }
    );
}

#[tokio::test]
async fn test_non_2xx_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(401).body("Unauthorized");
        })
        .await;

    let err = service(&server).send("0241234567", "Hello", None).await.unwrap_err();

    assert_eq!(err.http_status(), Some(401));
    assert!(err.is_transport());
    assert_eq!(err.provider_code(), None);
}

#[tokio::test]
async fn test_non_json_body_is_encoded_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = service(&server).send("0241234567", "Hello", None).await.unwrap_err();
    assert!(matches!(err, SmsError::ProviderEncoded { code: None, .. }));
}

#[tokio::test]
async fn test_invalid_phone() {
    let server = MockServer::start_async().await;
    let err = service(&server).send("", "Hello", None).await.unwrap_err();
    assert!(matches!(err, SmsError::InvalidPhoneFormat { .. }));
}
