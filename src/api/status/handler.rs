// Health and build information

use axum::{extract::State, http::StatusCode};
use serde_json::json;
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// Returns API status and health information
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> HandlerResponse {
    info!("Status endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "environment": state.environment.environment.as_ref(),
            "route_count": state.routes.len(),
            "max_redirects": state.navigator.max_redirects(),
        }))
        .message("Navigation service is running")
}
