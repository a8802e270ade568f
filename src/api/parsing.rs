//! Extraction of method and body from API Gateway / Function URL proxy events.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::RelayError;

/// HTTP method of a proxy event.
///
/// Payload v2 (`requestContext.http.method`) wins over v1 (`httpMethod`).
#[must_use]
pub fn get_http_method(payload: &Value) -> Option<&str> {
    payload
        .get("requestContext")
        .and_then(|ctx| ctx.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
}

/// Request body as text, base64-decoded when the event says so.
///
/// # Errors
///
/// Returns [`RelayError::MalformedSubmission`] when the body is missing,
/// not a string, or not valid base64 / UTF-8.
pub fn extract_body(payload: &Value) -> Result<String, RelayError> {
    let body = payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::MalformedSubmission("missing body".to_string()))?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes)
        .map_err(|e| RelayError::MalformedSubmission(format!("body is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_v2_method_before_v1() {
        let payload = json!({
            "httpMethod": "GET",
            "requestContext": { "http": { "method": "POST" } }
        });
        assert_eq!(get_http_method(&payload), Some("POST"));
    }

    #[test]
    fn falls_back_to_v1_method() {
        let payload = json!({ "httpMethod": "PUT" });
        assert_eq!(get_http_method(&payload), Some("PUT"));
        assert_eq!(get_http_method(&json!({})), None);
    }

    #[test]
    fn decodes_base64_body() {
        let payload = json!({ "body": "eyJhIjoxfQ==", "isBase64Encoded": true });
        assert_eq!(extract_body(&payload).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn missing_body_is_malformed() {
        let err = extract_body(&json!({})).unwrap_err();
        assert!(matches!(err, RelayError::MalformedSubmission(_)));
    }

    #[test]
    fn bad_base64_is_malformed() {
        let payload = json!({ "body": "***", "isBase64Encoded": true });
        assert!(matches!(
            extract_body(&payload),
            Err(RelayError::MalformedSubmission(_))
        ));
    }
}
