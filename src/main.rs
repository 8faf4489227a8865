// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use social_app_router::config::{environment::EnvironmentVariables, state::AppState};
use social_app_router::navigation::app_routes;
use social_app_router::core::{logging::init_tracing, server::{create_app, setup_listener, shutdown_signal}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    // a defective route table aborts startup here
    let env: EnvironmentVariables = EnvironmentVariables::instance().clone();
    let state: AppState = AppState::with_routes(env, app_routes())?;

    // build our router
    let app: Router = create_app(state.clone());

    let listener: TcpListener = setup_listener(&state.environment).await?;

    tracing::info!(
        "Navigation service listening on: {}://{}",
        state.environment.protocol,
        listener.local_addr()?
    );

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
