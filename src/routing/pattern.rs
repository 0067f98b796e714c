//! Route patterns.
//!
//! # Responsibilities
//! - Normalize patterns and request paths to a leading `/`
//! - Classify a pattern as exact or trailing wildcard
//! - Test a normalized request path against a single pattern
//!
//! # Design Decisions
//! - Normalization happens once, at registration time
//! - Only a trailing `*` is a wildcard; a `*` anywhere else is literal text
//! - Matching is case-sensitive, like the path itself

use std::borrow::Cow;
use std::fmt;

/// Prefix `path` with `/` unless it already starts with one.
///
/// Borrows when the path is already normalized.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// A registered route pattern, either exact (`/foo/bar`) or a trailing
/// wildcard (`/foo/*`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    normalized: String,
    wildcard: bool,
}

impl RoutePattern {
    /// Parse a pattern as registered by the caller.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        let normalized = normalize_path(pattern.as_ref()).into_owned();
        let wildcard = normalized.ends_with('*');
        Self { normalized, wildcard }
    }

    /// The pattern with its leading `/` guaranteed.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Whether the pattern ends with `*`.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether the pattern is a literal path.
    pub fn is_exact(&self) -> bool {
        !self.wildcard
    }

    /// Length of the normalized pattern, used to rank competing wildcards.
    pub fn specificity(&self) -> usize {
        self.normalized.len()
    }

    /// The literal part of a wildcard pattern (the pattern without its
    /// trailing `*`), or the whole pattern when exact.
    pub fn prefix(&self) -> &str {
        if self.wildcard {
            &self.normalized[..self.normalized.len() - 1]
        } else {
            &self.normalized
        }
    }

    /// Test a request path. The path is normalized before comparison.
    pub fn matches(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if self.wildcard {
            path.starts_with(self.prefix())
        } else {
            *path == *self.normalized
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for RoutePattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}
