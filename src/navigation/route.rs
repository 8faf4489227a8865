// Route entries and per-entry path matching

use serde::Serialize;

use crate::navigation::url::split_segments;
use crate::navigation::view::ViewIdentifier;

/// Path of the catch-all entry.
pub const WILDCARD: &str = "**";

/// How an entry's path is compared with the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMatch {
    #[default]
    Prefix,
    Full,
}

/// What a matched entry does: render a view or send the navigation elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    View(ViewIdentifier),
    #[serde(rename = "redirect_to")]
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    path: String,
    #[serde(flatten)]
    target: RouteTarget,
    path_match: PathMatch,
    #[serde(skip)]
    segments: Vec<String>,
}

impl RouteEntry {
    fn new(path: &str, target: RouteTarget) -> Self {
        let path: &str = path.trim_start_matches('/');
        Self {
            path: path.to_string(),
            target,
            path_match: PathMatch::Prefix,
            segments: split_segments(path),
        }
    }

    pub fn view(path: &str, view: ViewIdentifier) -> Self {
        Self::new(path, RouteTarget::View(view))
    }

    pub fn redirect(path: &str, to: &str) -> Self {
        Self::new(path, RouteTarget::Redirect(to.to_string()))
    }

    /// Requires the whole URL to equal this entry's path.
    pub fn full_match(mut self) -> Self {
        self.path_match = PathMatch::Full;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn path_match(&self) -> PathMatch {
        self.path_match
    }

    pub fn destination(&self) -> Option<ViewIdentifier> {
        match &self.target {
            RouteTarget::View(view) => Some(*view),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::View(_) => None,
            RouteTarget::Redirect(to) => Some(to),
        }
    }

    pub fn is_full_match(&self) -> bool {
        self.path_match == PathMatch::Full
    }

    pub fn is_wildcard(&self) -> bool {
        self.path == WILDCARD
    }

    /// Returns how many URL segments this entry consumes, or `None` when it
    /// does not match.
    ///
    /// A view entry has no children, so it only matches when every segment
    /// is consumed. A prefix redirect may leave segments over; they are
    /// carried to a relative redirect target.
    pub fn consume(&self, url: &[String]) -> Option<usize> {
        if self.is_wildcard() {
            return Some(url.len());
        }

        let own: &[String] = &self.segments;
        match self.path_match {
            PathMatch::Full => (own == url).then_some(own.len()),
            PathMatch::Prefix => {
                if !url.starts_with(own) {
                    return None;
                }
                match &self.target {
                    RouteTarget::View(_) if url.len() > own.len() => None,
                    _ => Some(own.len()),
                }
            }
        }
    }
}
