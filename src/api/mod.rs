//! Catalog API Client
//!
//! Browser `fetch` bindings to the sweet-shop REST endpoints, organized by domain.
//! Every call is a single round trip; nothing is retried.

mod sweets;
mod purchase;

use std::sync::OnceLock;

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ApiConfig, API_KEY_HEADER};
use crate::error::ApiError;
use crate::models::Envelope;

// Re-export all public items
pub use sweets::*;
pub use purchase::*;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

fn config() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::from_build_env)
}

/// Attach the JSON content type and the static API key
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Content-Type", "application/json")
        .header(API_KEY_HEADER, &config().api_key)
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Send a built request and interpret the reply
async fn dispatch<T>(label: &str, request: Result<Request, gloo_net::Error>) -> Result<T, ApiError>
where
    T: DeserializeOwned + Envelope,
{
    let response = request.map_err(transport)?.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    log::debug!("[API] {} -> HTTP {}", label, status);
    interpret(status, &body)
}

/// Map an HTTP status and body onto the typed response or an `ApiError`
pub(crate) fn interpret<T>(status: u16, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Envelope,
{
    if !(200..300).contains(&status) {
        return Err(ApiError::Server { status, message: server_message(body) });
    }
    let parsed: T = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !parsed.ok() {
        return Err(ApiError::Rejected(parsed.message().map(str::to_string)));
    }
    Ok(parsed)
}

/// Best human-readable message in an error body.
///
/// The backend answers `{"detail": ...}` where `detail` is a string, an object
/// carrying `message`/`detail`, or a list of validation errors with `msg`.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(text_of)
        .or_else(|| value.get("message").and_then(text_of))
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(text_of)
            .or_else(|| map.get("detail").and_then(text_of))
            .or_else(|| map.get("msg").and_then(text_of)),
        Value::Array(list) => list.iter().find_map(text_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteResponse, ListResponse, PurchaseResponse};

    #[test]
    fn test_success_returns_exact_server_list() {
        let body = r#"{"status":true,"message":"ok","sweets":[
            {"_id":"1","name":"Ladoo","category":"Candy","price":2.0,"quantity":5,"is_available":true},
            {"_id":"2","name":"Brownie","category":"Cake","price":4.0,"quantity":0,"is_available":false}
        ]}"#;
        let list: ListResponse = interpret(200, body).unwrap();
        let ids: Vec<_> = list.sweets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_status_false_is_rejected_with_message() {
        let err = interpret::<DeleteResponse>(200, r#"{"status":false,"message":"nope"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected(Some("nope".to_string())));
    }

    #[test]
    fn test_non_2xx_carries_detail_message() {
        let body = r#"{"detail":{"status":false,"message":"Not enough quantity available"}}"#;
        let err = interpret::<PurchaseResponse>(400, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server { status: 400, message: Some("Not enough quantity available".to_string()) }
        );
    }

    #[test]
    fn test_garbage_body_is_decode_error() {
        let err = interpret::<ListResponse>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_server_message_shapes() {
        assert_eq!(
            server_message(r#"{"detail":{"status":false,"detail":"Sweet not found"}}"#).as_deref(),
            Some("Sweet not found")
        );
        assert_eq!(server_message(r#"{"detail":"Invalid API-Key"}"#).as_deref(), Some("Invalid API-Key"));
        assert_eq!(
            server_message(r#"{"detail":{"status":false,"message":{"status":false,"detail":"db down"}}}"#).as_deref(),
            Some("db down")
        );
        assert_eq!(
            server_message(r#"{"detail":[{"loc":["body","price"],"msg":"ensure this value is greater than 0"}]}"#)
                .as_deref(),
            Some("ensure this value is greater than 0")
        );
        assert_eq!(server_message(r#"{"message":"plain"}"#).as_deref(), Some("plain"));
        assert_eq!(server_message("Internal Server Error"), None);
        assert_eq!(server_message(r#"{"detail":""}"#), None);
    }
}
