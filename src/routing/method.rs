//! Per-pattern method dispatch.
//!
//! # Design Decisions
//! - Lookup is exact and case-sensitive; callers register canonical
//!   uppercase verbs (`GET`, `POST`, ...)
//! - Unregistered methods are simply absent

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::handler::{BoxHandler, Handler};

/// HTTP method name → handler for a single route pattern.
pub struct MethodTable<E, R, T> {
    handlers: HashMap<String, BoxHandler<E, R, T>>,
}

impl<E, R, T> MethodTable<E, R, T> {
    /// Create an empty method table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Builder-style registration of a handler for `method`.
    pub fn on<H>(mut self, method: impl Into<String>, handler: H) -> Self
    where
        H: Handler<E, R, T> + 'static,
    {
        self.insert(method, Arc::new(handler));
        self
    }

    /// Register a handler, returning the one it replaces.
    pub fn insert(
        &mut self,
        method: impl Into<String>,
        handler: BoxHandler<E, R, T>,
    ) -> Option<BoxHandler<E, R, T>> {
        self.handlers.insert(method.into(), handler)
    }

    /// Move every handler of `other` into this table. Handlers in `other`
    /// win on conflicting methods.
    pub fn merge(&mut self, other: MethodTable<E, R, T>) {
        self.handlers.extend(other.handlers);
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler registered under exactly `method`, if any.
    pub fn get(&self, method: &str) -> Option<&BoxHandler<E, R, T>> {
        self.handlers.get(method)
    }
}

/// Select the handler registered for `method`.
pub fn dispatch_method<'a, E, R, T>(
    table: &'a MethodTable<E, R, T>,
    method: &str,
) -> Option<&'a BoxHandler<E, R, T>> {
    table.get(method)
}

impl<E, R, T> Default for MethodTable<E, R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R, T> Clone for MethodTable<E, R, T> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<E, R, T> fmt::Debug for MethodTable<E, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.methods())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MethodTable<(), &'static str, ()> {
        MethodTable::new()
            .on("POST", |_: ()| async { Ok::<_, ()>("Foo") })
            .on("GET", |_: ()| async { Ok::<_, ()>("FooAlt") })
    }

    #[tokio::test]
    async fn test_dispatch_registered_method() {
        let table = table();
        let handler = dispatch_method(&table, "GET").unwrap();
        assert_eq!(handler.call(()).await, Ok("FooAlt"));
    }

    #[test]
    fn test_dispatch_missing_method() {
        assert!(dispatch_method(&table(), "HEAD").is_none());
    }

    #[test]
    fn test_dispatch_is_case_sensitive() {
        assert!(dispatch_method(&table(), "post").is_none());
    }

    #[tokio::test]
    async fn test_merge_replaces_conflicting_methods() {
        let mut base = table();
        base.merge(MethodTable::new().on("POST", |_: ()| async { Ok::<_, ()>("Replaced") }));
        assert_eq!(base.methods(), vec!["GET", "POST"]);
        let handler = dispatch_method(&base, "POST").unwrap();
        assert_eq!(handler.call(()).await, Ok("Replaced"));
    }
}
