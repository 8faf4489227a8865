//! tests/mod.rs
//! A shared test helper to spawn the navigation service on an ephemeral port.

#![allow(dead_code)]

use social_app_router::config::{state::AppState, environment::EnvironmentVariables};
use social_app_router::core::server::create_app;
use social_app_router::navigation::{app_routes, RouteTable};

use tokio::net::TcpListener as TokioTcpListener;
use axum::{Router, serve};

/// Spawns the app with the real route table and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(app_routes())
}

/// Spawns the app around a custom route table.
pub fn spawn_app_with(routes: RouteTable) -> String {
    // * Defaults only, so a developer's .env cannot change test behavior.
    let env: EnvironmentVariables = EnvironmentVariables::default();
    let state: AppState = AppState::with_routes(env, routes).expect("Route table should validate");

    // * Same router and layers as main().
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// A client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}

/// Reads the body as the uniform JSON envelope.
pub async fn envelope(resp: reqwest::Response) -> serde_json::Value {
    let body: String = resp.text().await.expect("Failed to read body");
    serde_json::from_str(&body).expect("Body should be JSON")
}
