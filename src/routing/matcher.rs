//! Path pattern matching logic.
//!
//! # Responsibilities
//! - Parse pattern strings into literal and `:named` segments
//! - Match concrete paths segment-by-segment (case-sensitive)
//! - Bind named parameter values on a successful match
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A pattern matches only paths with the same segment count; the
//!   catch-all variant is the single exception and matches anything
//! - No regex to guarantee O(n) matching

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Matches any single path segment and binds it under the given name.
    Param(String),
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Fixed-length sequence of literal and parameter segments.
    Segments(Vec<Segment>),
    /// Matches every path; used for the terminal not-found entry.
    CatchAll,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// Segments prefixed with `:` become named parameters; `"*"` is the
    /// catch-all. `"/"` parses to an empty segment list and matches only
    /// the root path.
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            return PathPattern::CatchAll;
        }
        let segments = split_segments(pattern)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        PathPattern::Segments(segments)
    }

    /// Match a concrete path, binding parameter values on success.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        match self {
            PathPattern::CatchAll => Some(PathParams::default()),
            PathPattern::Segments(segments) => {
                let parts: Vec<&str> = split_segments(path).collect();
                if parts.len() != segments.len() {
                    return None;
                }
                let mut params = PathParams::default();
                for (segment, part) in segments.iter().zip(&parts) {
                    match segment {
                        Segment::Literal(literal) => {
                            if literal.as_str() != *part {
                                return None;
                            }
                        }
                        Segment::Param(name) => params.bind(name, part),
                    }
                }
                Some(params)
            }
        }
    }

    /// The parameter names this pattern declares, in path order.
    pub fn param_names(&self) -> Vec<&str> {
        match self {
            PathPattern::CatchAll => Vec::new(),
            PathPattern::Segments(segments) => segments
                .iter()
                .filter_map(|segment| match segment {
                    Segment::Param(name) => Some(name.as_str()),
                    Segment::Literal(_) => None,
                })
                .collect(),
        }
    }
}

/// Parameter bindings extracted from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    fn bind(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Split on `/`, ignoring empty segments so `/a/b`, `a/b` and `/a/b/`
/// all yield the same sequence.
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
