// Route table of the social app front-end

use crate::navigation::route::{RouteEntry, WILDCARD};
use crate::navigation::table::RouteTable;
use crate::navigation::view::ViewIdentifier;

pub const START_PATH: &str = "/start";
pub const NOT_FOUND_PATH: &str = "/404";

/// Builds the application's route table.
///
/// Order matters: the empty path must match in full (a prefix match on `""`
/// would swallow every URL), and `**` stays last so it only catches what
/// nothing else claimed.
pub fn app_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteEntry::redirect("", START_PATH).full_match(),
        RouteEntry::view("start", ViewIdentifier::Welcome),
        RouteEntry::view("login", ViewIdentifier::LogIn),
        RouteEntry::view("signup", ViewIdentifier::SignUp),
        RouteEntry::view("edit", ViewIdentifier::EditUser),
        RouteEntry::view("user", ViewIdentifier::User),
        RouteEntry::view("create", ViewIdentifier::CreatePost),
        RouteEntry::view("post", ViewIdentifier::ShowPosts),
        RouteEntry::view("404", ViewIdentifier::NotFound),
        RouteEntry::redirect(WILDCARD, NOT_FOUND_PATH),
    ])
}
