/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code and context.
use actix_web::{HttpResponse, http::StatusCode};
use log::error;
use serde_json::{json, Value};

use crate::server::protocol::ServerWsMessage;

/// Formats a WebSocket error frame as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_MESSAGE").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. session id, pocket index).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    serde_json::to_string(&ServerWsMessage::error(code, message, context)).unwrap_or_else(|e| {
        error!("[WsError] Failed to serialize error frame {}: {}", code, e);
        r#"{"action":"error","data":{"code":"INTERNAL","message":"Internal server error"}}"#.to_string()
    })
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}
