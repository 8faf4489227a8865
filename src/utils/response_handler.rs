// Unified response system for consistent API responses
// Provides HandlerResponse struct and middleware for standardizing all responses

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE}, HeaderValue, Method, Request, Response,
        response::Parts, StatusCode,
    },
    Json,
    middleware::Next,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{debug, error, info};
use std::convert::Infallible;
use serde_json::{json, Value};
use serde::{Serialize, Deserialize};
use crate::utils::utils::to_two_space_indented_json;

/// Standard JSON response format for all API endpoints
#[derive(Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "OK", "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: serde_json::Value, // Response payload
    pub messages: Vec<String>,   // Informational messages
    pub date: String,            // ISO timestamp
}

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: serde_json::Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: serde_json::Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        })).into_response();

        *response.status_mut() = self.status_code;

        // Store HandlerResponse in extensions for middleware processing
        response.extensions_mut().insert(self);
        response
    }
}

/// "Not Found" -> "NOT_FOUND"
fn format_status(parts: &Parts) -> String {
    parts.status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Data and messages a handler attached through `HandlerResponse`;
/// responses built elsewhere (layer errors, 405s) carry neither.
fn extract_response_components(response: &Response<Body>) -> (Vec<String>, Value) {
    response
        .extensions()
        .get::<HandlerResponse>()
        .map(|r| (r.messages.clone(), r.data.clone()))
        .unwrap_or_else(|| (Vec::new(), Value::Null))
}

impl ResponseFormat {
    fn from_parts(parts: &Parts, data: Value, messages: Vec<String>) -> Self {
        Self {
            status: format_status(parts),
            code: parts.status.as_u16(),
            data,
            messages,
            date: Utc::now().to_rfc3339(),
        }
    }

    /// Replaces the body of `parts` with this envelope
    fn into_http_response(self, mut parts: Parts) -> Response<Body> {
        match to_two_space_indented_json(&self) {
            Ok(spaced_json) => debug!("\nFinal response:\n{}", spaced_json),
            Err(err) => error!("Failed to format response JSON: {:?}", err),
        }

        let json_body: Vec<u8> = serde_json::to_vec(&self).unwrap_or_else(|err| {
            error!("Failed to serialize wrapped response: {err}");
            b"{}".to_vec()
        });

        parts.headers.remove(CONTENT_LENGTH);
        parts.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Response::from_parts(parts, Body::from(json_body))
    }
}

/// Middleware that wraps all responses in the standard ResponseFormat structure
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_string();

    let response: Response<Body> = next.run(req).await;

    let (messages, data) = extract_response_components(&response);
    let (parts, _) = response.into_parts();

    info!(%method, %path, status = parts.status.as_u16(), "request completed");

    let wrapped: ResponseFormat = ResponseFormat::from_parts(&parts, data, messages);
    Ok(wrapped.into_http_response(parts))
}
