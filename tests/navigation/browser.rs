//! tests/navigation/browser.rs
//! Plain GET requests to front-end paths, as a browser would send them.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

const NAMED: [(&str, &str); 7] = [
    ("start", "welcome"),
    ("login", "log-in"),
    ("signup", "sign-up"),
    ("edit", "edit-user"),
    ("user", "user"),
    ("create", "create-post"),
    ("post", "show-posts"),
];

#[tokio::test]
async fn root_redirects_to_start() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::no_redirect_client()
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/start");

    let json: Value = common::envelope(resp).await;
    assert_eq!(json["status"], "TEMPORARY_REDIRECT");
    assert_eq!(json["data"]["to"], "/start");

    let with_query: reqwest::Response = common::no_redirect_client()
        .get(format!("{}/?ref=mail", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(with_query.headers()["location"], "/start");
}

#[tokio::test]
async fn named_paths_render_their_views() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::no_redirect_client();

    for (path, view) in NAMED {
        let resp: reqwest::Response = client
            .get(format!("{}/{}", base_url, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::OK, "path /{path}");

        let json: Value = common::envelope(resp).await;
        assert_eq!(json["data"]["view"], view, "path /{path}");
        assert_eq!(json["data"]["url"], format!("/{path}"));
    }
}

#[tokio::test]
async fn unknown_path_redirects_to_bare_404() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::no_redirect_client()
        .get(format!("{}/settings/privacy?from=menu", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    // The fallback target is absolute, so the query is not carried over.
    assert_eq!(resp.headers()["location"], "/404");
}

#[tokio::test]
async fn not_found_view_is_same_directly_and_via_fallback() {
    let base_url: String = common::spawn_app();

    // The default client follows the 307 to /404.
    let via_fallback: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/no/such/page", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(via_fallback.status(), StatusCode::NOT_FOUND);
    let fallback_json: Value = common::envelope(via_fallback).await;

    let direct: reqwest::Response = common::no_redirect_client()
        .get(format!("{}/404", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(direct.status(), StatusCode::NOT_FOUND);
    let direct_json: Value = common::envelope(direct).await;

    assert_eq!(direct_json["data"]["view"], "not-found");
    assert_eq!(direct_json["data"], fallback_json["data"]);
}

#[tokio::test]
async fn extra_segments_do_not_match_a_view() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::no_redirect_client()
        .get(format!("{}/login/extra", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/404");
}
