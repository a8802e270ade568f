//! Proxy response builders shared by the handler.

use serde_json::{Value, json};

use crate::errors::RelayError;

pub const SUCCESS_MESSAGE: &str = "Test data sent to Telegram";

fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response reporting successful delivery.
#[must_use]
pub fn ok_delivered() -> Value {
    json_response(200, &json!({ "success": true, "message": SUCCESS_MESSAGE }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Maps an error to its generic caller-facing response.
#[must_use]
pub fn error_to_response(error: &RelayError) -> Value {
    err_response(error.status_code(), error.public_message())
}
