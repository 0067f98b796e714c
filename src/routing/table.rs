//! Route table storage.
//!
//! # Responsibilities
//! - Own every registered pattern and its method table
//! - Keep patterns unique after leading-slash normalization
//! - Preserve registration order for the equal-length wildcard tie-break
//!
//! # Design Decisions
//! - Built once by the embedding application, read-only afterwards
//! - Registering a pattern twice merges the method tables
//! - Stored as a `Vec`, so iteration order never depends on hashing

use std::fmt;

use crate::handler::Handler;
use crate::routing::method::MethodTable;
use crate::routing::pattern::RoutePattern;

/// One registered pattern with its handlers.
pub struct Route<E, R, T> {
    pattern: RoutePattern,
    methods: MethodTable<E, R, T>,
}

impl<E, R, T> Route<E, R, T> {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn methods(&self) -> &MethodTable<E, R, T> {
        &self.methods
    }
}

/// Route pattern → method table.
pub struct RouteTable<E, R, T> {
    routes: Vec<Route<E, R, T>>,
}

impl<E, R, T> RouteTable<E, R, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Builder-style registration of a single `(pattern, method)` handler.
    ///
    /// ```
    /// use apigw_router::RouteTable;
    ///
    /// let table: RouteTable<(), &str, String> = RouteTable::new()
    ///     .route("/foo", "POST", |_: ()| async { Ok::<_, String>("h1") })
    ///     .route("/bar", "PUT", |_: ()| async { Ok::<_, String>("h2") });
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn route<H>(mut self, pattern: impl AsRef<str>, method: impl Into<String>, handler: H) -> Self
    where
        H: Handler<E, R, T> + 'static,
    {
        self.insert(pattern, MethodTable::new().on(method, handler));
        self
    }

    /// Builder-style registration of a whole method table.
    pub fn with(mut self, pattern: impl AsRef<str>, methods: MethodTable<E, R, T>) -> Self {
        self.insert(pattern, methods);
        self
    }

    /// Register `methods` under `pattern`, merging into an existing entry
    /// with the same normalized pattern.
    pub fn insert(&mut self, pattern: impl AsRef<str>, methods: MethodTable<E, R, T>) {
        let pattern = RoutePattern::new(pattern);
        match self.routes.iter_mut().find(|route| route.pattern == pattern) {
            Some(existing) => existing.methods.merge(methods),
            None => self.routes.push(Route { pattern, methods }),
        }
    }

    /// Method table registered under `pattern`.
    pub fn get(&self, pattern: impl AsRef<str>) -> Option<&MethodTable<E, R, T>> {
        let pattern = RoutePattern::new(pattern);
        self.routes
            .iter()
            .find(|route| route.pattern == pattern)
            .map(|route| &route.methods)
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<E, R, T>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<E, R, T> Default for RouteTable<E, R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R, T> Clone for RouteTable<E, R, T> {
    fn clone(&self) -> Self {
        Self {
            routes: self
                .routes
                .iter()
                .map(|route| Route {
                    pattern: route.pattern.clone(),
                    methods: route.methods.clone(),
                })
                .collect(),
        }
    }
}

impl<E, R, T, P> FromIterator<(P, MethodTable<E, R, T>)> for RouteTable<E, R, T>
where
    P: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (P, MethodTable<E, R, T>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (pattern, methods) in iter {
            table.insert(pattern, methods);
        }
        table
    }
}

impl<E, R, T> fmt::Debug for RouteTable<E, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.routes.iter().map(|route| (route.pattern.as_str(), &route.methods)))
            .finish()
    }
}
