//! tests/navigation/resolve_api.rs
//! The JSON resolution API: /api/navigate and /api/routes.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

async fn navigate(base_url: &str, path: &str) -> (StatusCode, Value) {
    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/navigate?path={}", base_url, path))
        .send()
        .await
        .expect("Failed to execute request.");

    let status: StatusCode = resp.status();
    (status, common::envelope(resp).await)
}

#[tokio::test]
async fn empty_path_settles_on_welcome_after_one_redirect() {
    let base_url: String = common::spawn_app();

    let (status, json) = navigate(&base_url, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["view"], "welcome");
    assert_eq!(json["data"]["final_url"], "/start");
    assert_eq!(json["data"]["redirects"], json!(["/start"]));
}

#[tokio::test]
async fn each_named_path_resolves_to_a_distinct_view() {
    let base_url: String = common::spawn_app();
    let mut seen: Vec<String> = Vec::new();

    for path in ["start", "login", "signup", "edit", "user", "create", "post", "404"] {
        let (_, json) = navigate(&base_url, &format!("/{path}")).await;
        assert_eq!(json["data"]["redirects"], json!([]), "path /{path}");

        let view: String = json["data"]["view"].as_str().unwrap().to_string();
        assert!(!seen.contains(&view), "view {view} reached twice");
        seen.push(view);
    }

    assert_eq!(seen.len(), 8);
}

#[tokio::test]
async fn unknown_path_falls_back_to_not_found() {
    let base_url: String = common::spawn_app();

    let (status, json) = navigate(&base_url, "/bogus").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["data"]["view"], "not-found");
    assert_eq!(json["data"]["final_url"], "/404");
    assert_eq!(json["data"]["redirects"], json!(["/404"]));
}

#[tokio::test]
async fn lists_routes_in_match_order() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/routes", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = common::envelope(resp).await;
    let routes: &Vec<Value> = json["data"]["routes"].as_array().unwrap();

    assert_eq!(json["data"]["count"], 10);
    assert_eq!(routes[0]["path"], "");
    assert_eq!(routes[0]["path_match"], "full");
    assert_eq!(routes[0]["redirect_to"], "/start");
    assert_eq!(routes[1]["view"], "welcome");
    assert_eq!(routes[9]["path"], "**");
    assert_eq!(routes[9]["redirect_to"], "/404");
    assert_eq!(routes[9]["index"], 9);
}
