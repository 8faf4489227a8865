// Ordered route table and first-match resolution

use std::collections::HashSet;

use tracing::debug;

use crate::navigation::error::{NavigationError, RouteTableError};
use crate::navigation::route::RouteEntry;
use crate::navigation::url::UrlTree;

/// The entry chosen for a URL, plus the segments it did not consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub index: usize,
    pub leftover: Vec<String>,
}

/// Immutable, ordered list of route entries. The first matching entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        self.entries.iter().any(RouteEntry::is_wildcard)
    }

    /// Selects the first entry matching `url`.
    ///
    /// Total whenever the table holds a wildcard entry.
    pub fn resolve(&self, url: &UrlTree) -> Result<RouteMatch<'_>, NavigationError> {
        self.first_match(url, true)
            .inspect(|hit| {
                debug!(url = %url, route = hit.entry.path(), index = hit.index, "route matched");
            })
            .ok_or_else(|| NavigationError::NoMatch(url.to_string()))
    }

    fn first_match(&self, url: &UrlTree, include_wildcard: bool) -> Option<RouteMatch<'_>> {
        let segments: &[String] = url.segments();

        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| include_wildcard || !entry.is_wildcard())
            .find_map(|(index, entry)| {
                entry.consume(segments).map(|consumed| RouteMatch {
                    entry,
                    index,
                    leftover: segments[consumed..].to_vec(),
                })
            })
    }

    /// Entries that sit behind an earlier wildcard and can never be selected.
    pub fn unreachable_entries(&self) -> Vec<(usize, &RouteEntry)> {
        match self.entries.iter().position(RouteEntry::is_wildcard) {
            Some(wildcard) => self.entries.iter().enumerate().skip(wildcard + 1).collect(),
            None => Vec::new(),
        }
    }

    /// Checks the table for configuration defects, reporting the first one.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        if self.entries.is_empty() {
            return Err(RouteTableError::Empty);
        }

        if let Some((index, entry)) = self.unreachable_entries().first() {
            return Err(RouteTableError::UnreachableEntry {
                path: entry.path().to_string(),
                index: *index,
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path()) {
                return Err(RouteTableError::DuplicatePath(entry.path().to_string()));
            }
        }

        if !self.has_wildcard() {
            return Err(RouteTableError::MissingWildcard);
        }

        // A redirect must land on a concrete entry, not just on the fallback.
        for entry in &self.entries {
            if let Some(target) = entry.redirect_target() {
                let url: UrlTree = UrlTree::parse(target);
                if self.first_match(&url, false).is_none() {
                    return Err(RouteTableError::DanglingRedirect {
                        path: entry.path().to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
