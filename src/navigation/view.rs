// Screens the front-end can render

use std::fmt;

use serde::Serialize;

/// Identifies a presentational screen of the front-end.
///
/// The router never renders anything itself; it only tells the caller which
/// of these screens belongs to a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewIdentifier {
    Welcome,
    LogIn,
    SignUp,
    EditUser,
    User,
    CreatePost,
    ShowPosts,
    NotFound,
}

impl ViewIdentifier {
    pub const ALL: [ViewIdentifier; 8] = [
        ViewIdentifier::Welcome,
        ViewIdentifier::LogIn,
        ViewIdentifier::SignUp,
        ViewIdentifier::EditUser,
        ViewIdentifier::User,
        ViewIdentifier::CreatePost,
        ViewIdentifier::ShowPosts,
        ViewIdentifier::NotFound,
    ];

    /// Stable name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewIdentifier::Welcome => "welcome",
            ViewIdentifier::LogIn => "log-in",
            ViewIdentifier::SignUp => "sign-up",
            ViewIdentifier::EditUser => "edit-user",
            ViewIdentifier::User => "user",
            ViewIdentifier::CreatePost => "create-post",
            ViewIdentifier::ShowPosts => "show-posts",
            ViewIdentifier::NotFound => "not-found",
        }
    }
}

impl fmt::Display for ViewIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
