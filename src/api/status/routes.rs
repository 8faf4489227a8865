// Status route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/api/status", get(handler::status_handler))
}
