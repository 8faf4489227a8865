//! tests/global_errors/404.rs
//! Unknown API endpoints are plain 404s and never enter front-end routing.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_unknown_api_endpoint() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::no_redirect_client()
        .get(format!("{}/api/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get("location").is_none());

    let json: Value = common::envelope(resp).await;
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["data"]["path"], "/api/does-not-exist");
}

#[tokio::test]
async fn bare_api_prefix_is_not_a_front_end_route() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::no_redirect_client();

    for path in ["/api", "/api/"] {
        let resp: reqwest::Response = client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
        assert!(resp.headers().get("location").is_none(), "path {path}");

        let json: Value = common::envelope(resp).await;
        assert_eq!(json["data"]["path"], path);
    }
}
