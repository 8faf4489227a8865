// Handlers resolving front-end URLs against the route table

use axum::{
    extract::{Query, State},
    http::{header::LOCATION, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::navigation::{Navigation, NavigationError, Step, ViewIdentifier};
use crate::utils::response_handler::HandlerResponse;

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    #[serde(default)]
    pub path: String,
}

/// The not-found view is still a rendered page, but callers get a 404 status
fn view_status(view: ViewIdentifier) -> StatusCode {
    match view {
        ViewIdentifier::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

/// Lists the route table in match order
#[instrument(skip(state))]
pub async fn list_routes_handler(State(state): State<AppState>) -> HandlerResponse {
    let routes: Vec<serde_json::Value> = state
        .routes
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut value: serde_json::Value = json!(entry);
            value["index"] = json!(index);
            value
        })
        .collect();

    HandlerResponse::new(StatusCode::OK)
        .data(json!({ "count": routes.len(), "routes": routes }))
        .message("Route table in match order")
}

/// Resolves `?path=` and follows redirects to the final view
#[instrument(skip(state))]
pub async fn navigate_handler(
    State(state): State<AppState>,
    Query(query): Query<NavigateQuery>,
) -> Result<HandlerResponse, NavigationError> {
    let navigation: Navigation = state.navigator.navigate(&query.path)?;
    let status: StatusCode = view_status(navigation.view);

    let mut response: HandlerResponse = HandlerResponse::new(status)
        .data(json!(navigation))
        .message(format!("Render view '{}'", navigation.view));

    if !navigation.redirects.is_empty() {
        response = response.message(format!(
            "Redirected {} time(s) before settling on '{}'",
            navigation.redirects.len(),
            navigation.final_url
        ));
    }

    Ok(response)
}

#[instrument]
pub async fn unknown_api_handler(uri: Uri) -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND)
        .data(json!({ "path": uri.path() }))
        .message("Unknown API endpoint")
}

/// Browser-facing navigation: one resolution step per request, so redirects
/// become real HTTP redirects the client follows
#[instrument(skip(state))]
pub async fn browser_fallback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return HandlerResponse::new(StatusCode::METHOD_NOT_ALLOWED)
            .message("Front-end routes only answer GET")
            .into_response();
    }

    let raw: &str = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match state.navigator.step(raw) {
        Ok(Step::Redirect { from, to }) => {
            info!(from = %from, to = %to, "redirecting");
            let body: HandlerResponse = HandlerResponse::new(StatusCode::TEMPORARY_REDIRECT)
                .data(json!({ "from": from, "to": to }))
                .message(format!("Redirecting to {to}"));
            ([(LOCATION, to)], body).into_response()
        }
        Ok(Step::Render { url, view }) => HandlerResponse::new(view_status(view))
            .data(json!({ "url": url, "view": view }))
            .message(format!("Render view '{view}'"))
            .into_response(),
        Err(err) => err.into_response(),
    }
}
