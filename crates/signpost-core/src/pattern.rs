//! Path patterns.
//!
//! # Responsibilities
//! - Compile a raw pattern string into segments
//! - Match individual path segments
//!
//! # Design Decisions
//! - No regex: matching is O(segments)
//! - A literal segment matches verbatim, case-sensitive
//! - A `:name` segment matches any single path segment and binds it
//! - The pattern `/` contributes zero segments (a hierarchy root)

use std::fmt;

/// One compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches exactly this text.
    Literal(String),
    /// Matches any single segment and binds it under the given name.
    Param(String),
}

impl Segment {
    /// Whether this segment accepts the given path segment.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Segment::Literal(literal) => literal == candidate,
            Segment::Param(_) => true,
        }
    }

    /// Whether this is a parameter placeholder.
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// Compiled path pattern: an ordered list of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a raw pattern such as `/users/:id`.
    pub fn compile(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Compiled segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of path segments this pattern consumes.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root pattern `/`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => write!(f, "/{literal}")?,
                Segment::Param(name) => write!(f, "/:{name}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_mixed_pattern() {
        let pattern = PathPattern::compile("/users/:id/posts");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("users".to_string()),
                Segment::Param("id".to_string()),
                Segment::Literal("posts".to_string()),
            ]
        );
    }

    #[test]
    fn test_root_pattern_is_empty() {
        assert!(PathPattern::compile("/").is_empty());
        assert_eq!(PathPattern::compile("/").to_string(), "/");
    }

    #[test]
    fn test_segment_matching() {
        let literal = Segment::Literal("users".to_string());
        assert!(literal.matches("users"));
        assert!(!literal.matches("Users"));

        let param = Segment::Param("id".to_string());
        assert!(param.matches("42"));
        assert!(param.matches("anything"));
    }

    #[test]
    fn test_display_roundtrip() {
        let raw = "/users/:id/posts";
        assert_eq!(PathPattern::compile(raw).to_string(), raw);
    }
}
