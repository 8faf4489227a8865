// Application state shared by all handlers

use std::sync::Arc;
use anyhow::Context;
use crate::config::environment::EnvironmentVariables;
use crate::navigation::{Navigator, RouteTable};

// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub routes: Arc<RouteTable>,
    pub navigator: Navigator,
}

impl AppState {
    /// Builds state around an explicit configuration and route table.
    /// Fails when the route table does not validate.
    pub fn with_routes(environment: EnvironmentVariables, routes: RouteTable) -> anyhow::Result<Self> {
        routes.validate().context("Invalid route table")?;

        let environment_arc: Arc<EnvironmentVariables> = Arc::new(environment);
        let routes_arc: Arc<RouteTable> = Arc::new(routes);
        let navigator: Navigator = Navigator::new(routes_arc.clone(), environment_arc.max_redirects);

        tracing::info!("Route table loaded with {} entries", routes_arc.len());

        Ok(Self {
            environment: environment_arc,
            routes: routes_arc,
            navigator,
        })
    }
}
