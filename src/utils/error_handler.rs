// Global error handling for HTTP middleware layers and navigation failures

use axum::{
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::error;

use crate::navigation::NavigationError;
use crate::utils::response_handler::HandlerResponse;

/// Maps various error types to appropriate HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 408 if the request took too long
    if find_cause::<Elapsed>(&*err).is_some() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    error!("Unhandled middleware error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut source: Option<&(dyn Error + 'static)> = Some(err);

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

impl NavigationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NavigationError::NoMatch(_) => StatusCode::NOT_FOUND,
            NavigationError::RedirectLoop { .. } => StatusCode::LOOP_DETECTED,
        }
    }
}

impl IntoResponse for NavigationError {
    fn into_response(self) -> Response {
        let data = match &self {
            NavigationError::NoMatch(url) => json!({ "url": url }),
            NavigationError::RedirectLoop { requested, limit } => {
                json!({ "requested": requested, "max_redirects": limit })
            }
        };

        HandlerResponse::new(self.status_code())
            .data(data)
            .message(self.to_string())
            .into_response()
    }
}
