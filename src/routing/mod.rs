//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request (path, method)
//!     → pattern.rs (leading-slash normalization, exact / wildcard test)
//!     → matcher.rs (best match by specificity)
//!     → method.rs (exact method lookup)
//!     → Return: handler or nothing
//!
//! Table construction (at startup):
//!     (pattern, method, handler)*
//!     → table.rs (normalize, merge duplicates, keep order)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables are immutable once built and shared without locks
//! - No regex and no parameter capture; prefix matching only
//! - Deterministic: same table and path always select the same route

pub mod matcher;
pub mod method;
pub mod pattern;
pub mod table;

pub use matcher::{match_pattern, ResolvedMatch};
pub use method::{dispatch_method, MethodTable};
pub use pattern::{normalize_path, RoutePattern};
pub use table::{Route, RouteTable};

use crate::handler::BoxHandler;

/// Select the handler for `(path, method)`: best pattern first, then the
/// method within it.
pub fn search<'a, E, R, T>(
    table: &'a RouteTable<E, R, T>,
    path: &str,
    method: &str,
) -> Option<&'a BoxHandler<E, R, T>> {
    match_pattern(path, table).and_then(|matched| dispatch_method(matched.methods, method))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<(), &'static str, &'static str> {
        RouteTable::new()
            .route("/foo", "POST", |_: ()| async { Ok::<_, &str>("Foo") })
            .route("/foo", "GET", |_: ()| async { Ok::<_, &str>("FooAlt") })
            .route("bar", "PUT", |_: ()| async { Err::<&str, _>("Bar") })
    }

    #[test]
    fn test_search_unknown_path() {
        assert!(search(&table(), "/fake", "POST").is_none());
    }

    #[test]
    fn test_search_unknown_method() {
        assert!(search(&table(), "/foo", "HEAD").is_none());
    }

    #[tokio::test]
    async fn test_search_finds_handler() {
        let table = table();
        let handler = search(&table, "foo", "GET").unwrap();
        assert_eq!(handler.call(()).await, Ok("FooAlt"));

        let handler = search(&table, "/bar", "PUT").unwrap();
        assert_eq!(handler.call(()).await, Err("Bar"));
    }
}
