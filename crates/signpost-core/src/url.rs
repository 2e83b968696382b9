//! Opaque, comparable location values.
//!
//! A [`Url`] is the only thing the router knows about "where we are": a
//! normalized path plus optional query and fragment. Two urls are compared
//! by structural equality. The router never mutates a url - a commit
//! replaces the stored value wholesale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized location value.
///
/// The path always starts with `/` and never ends with one (except the
/// root itself), so `/users/` and `/users` compare equal. Empty query and
/// fragment strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Url {
    /// Parse a raw location string into its normalized form.
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
            path: normalize_path(path),
            query: query.filter(|q| !q.is_empty()),
            fragment: fragment.filter(|f| !f.is_empty()),
        }
    }

    /// The root location, `/`.
    pub fn root() -> Self {
        Self::parse("/")
    }

    /// Normalized path, including the leading `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string, without the `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Fragment, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Path segments in order, with empty segments dropped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

impl Default for Url {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for Url {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Url {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

fn normalize_path(path: &str) -> String {
    let mut out = String::from("/");
    let mut first = true;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !first {
            out.push('/');
        }
        out.push_str(segment);
        first = false;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_trailing_and_duplicate_slashes() {
        assert_eq!(Url::parse("/users/"), Url::parse("/users"));
        assert_eq!(Url::parse("users//42"), Url::parse("/users/42"));
        assert_eq!(Url::parse("").path(), "/");
        assert_eq!(Url::parse("/").path(), "/");
    }

    #[test]
    fn test_query_and_fragment_split() {
        let url = Url::parse("/traces/42?tab=spans#row-7");
        assert_eq!(url.path(), "/traces/42");
        assert_eq!(url.query(), Some("tab=spans"));
        assert_eq!(url.fragment(), Some("row-7"));
    }

    #[test]
    fn test_structural_equality_includes_query() {
        assert_ne!(Url::parse("/a?x=1"), Url::parse("/a?x=2"));
        assert_ne!(Url::parse("/a"), Url::parse("/a?x=1"));
        assert_eq!(Url::parse("/a?"), Url::parse("/a"));
    }

    #[test]
    fn test_segments() {
        let url = Url::parse("/users/42/posts");
        let segments: Vec<_> = url.segments().collect();
        assert_eq!(segments, vec!["users", "42", "posts"]);
        assert_eq!(Url::root().segments().count(), 0);
    }

    #[test]
    fn test_display_roundtrip() {
        let raw = "/traces/42?tab=spans#row-7";
        let url = Url::parse(raw);
        assert_eq!(Url::parse(&url.to_string()), url);
    }
}
