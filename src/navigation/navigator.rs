// Follows redirects until a view is reached

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::navigation::error::NavigationError;
use crate::navigation::route::{RouteEntry, RouteTarget};
use crate::navigation::table::{RouteMatch, RouteTable};
use crate::navigation::url::UrlTree;
use crate::navigation::view::ViewIdentifier;

/// Result of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub requested: String,
    pub final_url: String,
    pub view: ViewIdentifier,
    /// Every intermediate URL produced by a redirect, in order.
    pub redirects: Vec<String>,
}

/// Outcome of a single resolution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Render { url: String, view: ViewIdentifier },
    Redirect { from: String, to: String },
}

#[derive(Debug, Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    max_redirects: usize,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, max_redirects: usize) -> Self {
        Self { table, max_redirects }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Resolves `raw` once without following a redirect.
    pub fn step(&self, raw: &str) -> Result<Step, NavigationError> {
        let url: UrlTree = UrlTree::parse(raw);
        let hit: RouteMatch<'_> = self.table.resolve(&url)?;

        Ok(match hit.entry.target() {
            RouteTarget::View(view) => Step::Render { url: url.to_string(), view: *view },
            RouteTarget::Redirect(to) => Step::Redirect {
                from: url.to_string(),
                to: url.redirected(to, &hit.leftover).to_string(),
            },
        })
    }

    /// Resolves `raw` and follows redirects to the view that gets rendered.
    pub fn navigate(&self, raw: &str) -> Result<Navigation, NavigationError> {
        let mut url: UrlTree = UrlTree::parse(raw);
        let mut redirects: Vec<String> = Vec::new();

        loop {
            let hit: RouteMatch<'_> = self.table.resolve(&url)?;
            let entry: &RouteEntry = hit.entry;

            match entry.target() {
                RouteTarget::View(view) => {
                    debug!(requested = raw, view = %view, redirects = redirects.len(), "navigation settled");
                    return Ok(Navigation {
                        requested: raw.to_string(),
                        final_url: url.to_string(),
                        view: *view,
                        redirects,
                    });
                }
                RouteTarget::Redirect(to) => {
                    if redirects.len() >= self.max_redirects {
                        warn!(requested = raw, limit = self.max_redirects, "redirect limit reached");
                        return Err(NavigationError::RedirectLoop {
                            requested: raw.to_string(),
                            limit: self.max_redirects,
                        });
                    }

                    if entry.is_wildcard() {
                        info!(url = %url, to = %to, "no route for url, using fallback");
                    }

                    url = url.redirected(to, &hit.leftover);
                    redirects.push(url.to_string());
                }
            }
        }
    }
}
