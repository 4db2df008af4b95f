//! Outbound request and response shapes for the YouTube REST API.

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

use crate::domains::auth::AuthDecoration;

/// One fully resolved outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    /// Resource path relative to the API base URL, e.g. `/videos`.
    pub path: String,
    /// Routing parameters, in schema declaration order.
    pub query: Vec<(String, String)>,
    /// JSON body, forwarded verbatim.
    pub body: Option<Value>,
    pub auth: AuthDecoration,
}

impl RestRequest {
    /// The encoded query string (without credentials), mainly for logging.
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(&self.query).unwrap_or_default()
    }
}

/// Successful response payload, relayed without transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Non-JSON bodies such as caption tracks.
    Text(String),
    /// No body at all (`204 No Content` on deletes).
    Empty,
}

impl Payload {
    /// Classify a raw response body.
    pub fn from_body(body: String) -> Self {
        if body.trim().is_empty() {
            return Payload::Empty;
        }
        match serde_json::from_str(&body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(body),
        }
    }
}

/// The REST call failed: non-success status or transport-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    /// HTTP status when the API answered at all.
    pub status: Option<u16>,
    /// The most specific human-readable message available.
    pub message: String,
}

impl UpstreamError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build an error from a non-success response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::new(Some(status), extract_error_message(status, body))
    }
}

/// Pick the most specific message out of a failure body.
///
/// Google APIs answer with `{"error": {"message": ..., "errors": [{"message": ...}]}}`;
/// the OAuth endpoint answers with `{"error": "...", "error_description": "..."}`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let candidates = [
            value.pointer("/error/message"),
            value.pointer("/error/errors/0/message"),
            value.get("error_description"),
            value.get("error").filter(|e| e.is_string()),
            value.get("message"),
        ];
        if let Some(message) = candidates
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .find(|m| !m.trim().is_empty())
        {
            return message.to_string();
        }
    }

    let text = body.trim();
    if !text.is_empty() && !text.starts_with('{') {
        return text.to_string();
    }

    format!("YouTube API request failed with status {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_google_error_message_preferred() {
        let body = json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"message": "Quota exceeded", "reason": "quotaExceeded"}]
            }
        })
        .to_string();
        assert_eq!(
            extract_error_message(403, &body),
            "The request cannot be completed because you have exceeded your quota."
        );
    }

    #[test]
    fn test_nested_errors_used_when_top_message_missing() {
        let body = json!({"error": {"code": 400, "errors": [{"message": "Invalid part"}]}}).to_string();
        assert_eq!(extract_error_message(400, &body), "Invalid part");
    }

    #[test]
    fn test_oauth_error_description() {
        let body = json!({"error": "invalid_grant", "error_description": "Token has been expired or revoked."})
            .to_string();
        assert_eq!(extract_error_message(400, &body), "Token has been expired or revoked.");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(extract_error_message(502, "Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(
            extract_error_message(500, ""),
            "YouTube API request failed with status 500"
        );
        assert_eq!(
            extract_error_message(500, "{\"error\": {}}"),
            "YouTube API request failed with status 500"
        );
    }

    #[test]
    fn test_payload_classification() {
        assert_eq!(Payload::from_body(String::new()), Payload::Empty);
        assert_eq!(
            Payload::from_body("{\"items\": []}".into()),
            Payload::Json(json!({"items": []}))
        );
        let srt = "1\n00:00:00,000 --> 00:00:01,000\nhello\n".to_string();
        assert_eq!(Payload::from_body(srt.clone()), Payload::Text(srt));
    }

    #[test]
    fn test_query_string_encoding() {
        let request = RestRequest {
            method: Method::GET,
            path: "/search".into(),
            query: vec![
                ("part".into(), "snippet".into()),
                ("q".into(), "rust & tokio".into()),
            ],
            body: None,
            auth: AuthDecoration::ApiKey("k".into()),
        };
        assert_eq!(request.query_string(), "part=snippet&q=rust+%26+tokio");
    }
}
