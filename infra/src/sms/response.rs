//! Gateway response parsing.
//!
//! Each gateway encodes success and failure its own way; the parsers below
//! reduce both to [`ParsedResponse`] so the adapters only deal with one shape.

use serde_json::Value;
use std::time::Duration;

use fs_core::domain::entities::sms::ProviderId;
use fs_core::errors::SmsError;

/// Outcome encoded in a 2xx gateway response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    Success { message_id: Option<String> },
    Failure { code: Option<i64>, message: String },
}

impl ParsedResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ParsedResponse::Success { .. })
    }
}

/// Nalo success code
pub const NALO_SUCCESS_CODE: i64 = 1000;

/// Lowest Nalo error code
pub const NALO_FIRST_ERROR_CODE: i64 = 1001;

const MNOTIFY_DEFAULT_ERROR: &str = "Failed to send SMS via mNotify";

/// Parse a Nalo plain-text body such as `1000:ABC123` or `1709:User validation failed`.
///
/// The body is split at the first colon. A leading code of 1001 or more is a
/// failure; anything else, including a body without a colon, is success with
/// the trimmed remainder as message id.
pub fn parse_nalo_response(body: &str) -> ParsedResponse {
    let body = body.trim();
    let Some((code, rest)) = body.split_once(':') else {
        return ParsedResponse::Success { message_id: None };
    };
    let rest = rest.trim();

    match leading_integer(code.trim()) {
        Some(code) if code >= NALO_FIRST_ERROR_CODE => ParsedResponse::Failure {
            code: Some(code),
            message: if rest.is_empty() {
                format!("Nalo error code {}", code)
            } else {
                rest.to_string()
            },
        },
        _ => ParsedResponse::Success {
            message_id: (!rest.is_empty()).then(|| rest.to_string()),
        },
    }
}

/// Integer formed by the leading digits of `s`, with an optional sign
fn leading_integer(s: &str) -> Option<i64> {
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Parse an mNotify JSON document.
///
/// Success is `status == "success"` or `code == 200`, where `code` may be a
/// number or a string. The message id comes from `message_id` or `id`.
pub fn parse_mnotify_response(json: &Value) -> ParsedResponse {
    let status_success = json.get("status").and_then(Value::as_str) == Some("success");
    let code = json.get("code").and_then(loose_integer);

    if status_success || code == Some(200) {
        let message_id = loose_string(json.get("message_id"))
            .or_else(|| loose_string(json.get("id")));
        return ParsedResponse::Success { message_id };
    }

    let message = loose_string(json.get("message"))
        .or_else(|| loose_string(json.get("error")))
        .unwrap_or_else(|| MNOTIFY_DEFAULT_ERROR.to_string());
    ParsedResponse::Failure { code, message }
}

fn loose_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn loose_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Turn a failed request into an `SmsError`, keeping timeouts apart
pub(crate) fn request_error(provider: ProviderId, err: reqwest::Error, timeout: Duration) -> SmsError {
    if err.is_timeout() {
        SmsError::Timeout {
            provider,
            seconds: timeout.as_secs(),
        }
    } else {
        SmsError::transport(provider, err.status().map(|s| s.as_u16()), err.to_string())
    }
}
