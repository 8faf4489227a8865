//! Client-side navigation: an ordered route table mapping URL paths to the
//! screens of the front-end, plus the resolver that walks it.

pub mod app_routes;
pub mod error;
pub mod navigator;
pub mod route;
pub mod table;
pub mod url;
pub mod view;

pub use app_routes::app_routes;
pub use error::{NavigationError, RouteTableError};
pub use navigator::{Navigation, Navigator, Step};
pub use route::{PathMatch, RouteEntry, RouteTarget, WILDCARD};
pub use table::{RouteMatch, RouteTable};
pub use url::UrlTree;
pub use view::ViewIdentifier;
