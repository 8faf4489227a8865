// Library root for the social app navigation service

pub mod api;
pub mod config;
pub mod core;
pub mod navigation;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
