pub mod handler;
pub mod routes;

pub use routes::{browser_fallback, navigation_routes};
