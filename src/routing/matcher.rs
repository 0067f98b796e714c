//! Best-match selection across the route table.
//!
//! # Responsibilities
//! - Collect every pattern matching the request path
//! - Pick the single most specific candidate
//!
//! # Design Decisions
//! - An exact pattern always beats any wildcard
//! - Among wildcards the longest normalized pattern wins
//! - Equal-length wildcards: the first registered wins
//! - The outcome does not depend on registration order otherwise

use crate::routing::method::MethodTable;
use crate::routing::pattern::{normalize_path, RoutePattern};
use crate::routing::table::{Route, RouteTable};

/// The pattern selected for a request and its method table.
pub struct ResolvedMatch<'a, E, R, T> {
    pub pattern: &'a RoutePattern,
    pub methods: &'a MethodTable<E, R, T>,
}

impl<E, R, T> Clone for ResolvedMatch<'_, E, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, R, T> Copy for ResolvedMatch<'_, E, R, T> {}

impl<E, R, T> std::fmt::Debug for ResolvedMatch<'_, E, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedMatch")
            .field("pattern", &self.pattern.as_str())
            .field("methods", self.methods)
            .finish()
    }
}

/// Find the most specific route whose pattern matches `path`.
pub fn match_pattern<'a, E, R, T>(
    path: &str,
    table: &'a RouteTable<E, R, T>,
) -> Option<ResolvedMatch<'a, E, R, T>> {
    let path = normalize_path(path);

    table
        .iter()
        .filter(|route| route.pattern().matches(&path))
        .fold(None, |best: Option<&Route<E, R, T>>, candidate| match best {
            Some(current) if !outranks(candidate.pattern(), current.pattern()) => Some(current),
            _ => Some(candidate),
        })
        .map(|route| ResolvedMatch {
            pattern: route.pattern(),
            methods: route.methods(),
        })
}

/// Whether `candidate` should replace the current best match.
fn outranks(candidate: &RoutePattern, current: &RoutePattern) -> bool {
    match (candidate.is_exact(), current.is_exact()) {
        (true, false) => true,
        (false, false) => candidate.specificity() > current.specificity(),
        _ => false,
    }
}
