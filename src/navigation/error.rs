//! Errors raised while resolving or validating routes.

use thiserror::Error;

/// Failures of a single navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No entry matched and the table has no wildcard to fall back on.
    #[error("no route matches '{0}'")]
    NoMatch(String),

    /// Redirects kept bouncing past the configured limit.
    #[error("redirect loop while navigating to '{requested}' (gave up after {limit} redirects)")]
    RedirectLoop { requested: String, limit: usize },
}

/// Configuration defects found by `RouteTable::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,

    #[error("route table has no '**' fallback entry")]
    MissingWildcard,

    #[error("route '{path}' at position {index} comes after the '**' fallback and can never match")]
    UnreachableEntry { path: String, index: usize },

    #[error("route path '{0}' is declared more than once")]
    DuplicatePath(String),

    #[error("route '{path}' redirects to '{target}', which no route matches")]
    DanglingRedirect { path: String, target: String },
}
