// Navigation route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// JSON endpoints for resolving URLs and listing the route table
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/routes", get(handler::list_routes_handler))
        .route("/api/navigate", get(handler::navigate_handler))
        // Unknown API paths are real 404s, not front-end navigations
        .route("/api", get(handler::unknown_api_handler))
        .route("/api/", get(handler::unknown_api_handler))
        .route("/api/{*rest}", get(handler::unknown_api_handler))
}

/// Attaches the browser-facing fallback that resolves every other path
/// against the route table
pub fn browser_fallback(router: Router<AppState>) -> Router<AppState> {
    router.fallback(handler::browser_fallback_handler)
}
