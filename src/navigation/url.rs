// Parsed navigation URL

use std::fmt;

/// A navigation URL split into path segments, query and fragment.
///
/// Empty segments are dropped, so `""`, `"/"` and `"//"` all parse to the
/// root and `"/login/"` is the same URL as `"login"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlTree {
    segments: Vec<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl UrlTree {
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            segments: split_segments(path),
            query: query.filter(|q| !q.is_empty()),
            fragment: fragment.filter(|f| !f.is_empty()),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path part only, always absolute (`/` for the root).
    pub fn to_path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Builds the URL a redirect leads to.
    ///
    /// An absolute target (leading `/`) is a fresh URL: nothing of `self`
    /// survives. A relative target is resolved from the root, gets the
    /// `leftover` segments not consumed by the matching entry appended, and
    /// keeps the query and fragment of `self` unless it brings its own.
    pub fn redirected(&self, target: &str, leftover: &[String]) -> Self {
        let mut next: UrlTree = UrlTree::parse(target);
        if target.starts_with('/') {
            return next;
        }

        next.segments.extend(leftover.iter().cloned());
        if next.query.is_none() {
            next.query = self.query.clone();
        }
        if next.fragment.is_none() {
            next.fragment = self.fragment.clone();
        }
        next
    }
}

impl fmt::Display for UrlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

pub(crate) fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
