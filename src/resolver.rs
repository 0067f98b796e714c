//! Request resolution.
//!
//! # Responsibilities
//! - Extract `(path, method)` from the raw event
//! - Select the handler through the routing table
//! - Invoke it, or build a not-found value with the error constructor
//!
//! # Design Decisions
//! - Selection is synchronous; only the handler runs asynchronously
//! - One error channel: a missing path, pattern or method all go through
//!   the same error constructor, keyed by path only
//! - Handler results are returned untouched
//! - The miss reason is only visible in logs

use std::fmt;
use std::sync::Arc;

use futures_util::future;
use thiserror::Error;

use crate::event::RouteEvent;
use crate::handler::HandlerFuture;
use crate::routing::{dispatch_method, match_pattern, RouteTable};

/// Path used for the error when no path could be extracted at all.
pub const UNKNOWN_PATH: &str = "undefined";

/// Default not-found value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No route found for {path}")]
pub struct RouteNotFound {
    pub path: String,
}

impl RouteNotFound {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl From<RouteNotFound> for String {
    fn from(err: RouteNotFound) -> Self {
        err.to_string()
    }
}

/// Builds the failure value for an unroutable request from its path.
pub type ErrorConstructor<T> = Arc<dyn Fn(&str) -> T + Send + Sync>;

/// Why a request could not be routed. Logged, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    NoPath,
    NoRoute,
    NoMethod,
}

impl Miss {
    fn as_str(self) -> &'static str {
        match self {
            Miss::NoPath => "no_path",
            Miss::NoRoute => "no_route",
            Miss::NoMethod => "no_method",
        }
    }
}

/// Routes raw events to the handlers of a shared [`RouteTable`].
pub struct Resolver<E, R, T> {
    table: Arc<RouteTable<E, R, T>>,
    error_constructor: ErrorConstructor<T>,
}

impl<E, R, T> Resolver<E, R, T>
where
    E: RouteEvent,
    R: Send + 'static,
    T: Send + 'static,
{
    /// Resolver producing [`RouteNotFound`] (converted into `T`) on a miss.
    pub fn new(table: impl Into<Arc<RouteTable<E, R, T>>>) -> Self
    where
        T: From<RouteNotFound>,
    {
        Self::with_error_constructor(table, |path: &str| T::from(RouteNotFound::new(path)))
    }

    /// Resolver with a caller-defined not-found value.
    pub fn with_error_constructor<F>(table: impl Into<Arc<RouteTable<E, R, T>>>, error_constructor: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Self {
            table: table.into(),
            error_constructor: Arc::new(error_constructor),
        }
    }

    pub fn table(&self) -> &RouteTable<E, R, T> {
        &self.table
    }

    /// Route `event` and run the selected handler.
    ///
    /// Selection happens before this returns; the future only drives the
    /// handler (or yields the not-found value immediately).
    pub fn resolve(&self, event: E) -> HandlerFuture<R, T> {
        let Some(request) = event.path_and_method() else {
            return self.miss(UNKNOWN_PATH, None, Miss::NoPath);
        };

        let Some(matched) = match_pattern(&request.path, &self.table) else {
            return self.miss(&request.path, Some(&request.method), Miss::NoRoute);
        };

        let Some(handler) = dispatch_method(matched.methods, &request.method) else {
            return self.miss(&request.path, Some(&request.method), Miss::NoMethod);
        };

        tracing::debug!(
            path = %request.path,
            method = %request.method,
            pattern = %matched.pattern,
            "Route resolved"
        );

        handler.call(event)
    }

    fn miss(&self, path: &str, method: Option<&str>, reason: Miss) -> HandlerFuture<R, T> {
        tracing::debug!(
            path = %path,
            method = method.unwrap_or("-"),
            reason = reason.as_str(),
            "No route matched"
        );
        Box::pin(future::ready(Err((self.error_constructor)(path))))
    }
}

impl<E, R, T> Clone for Resolver<E, R, T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            error_constructor: Arc::clone(&self.error_constructor),
        }
    }
}

impl<E, R, T> fmt::Debug for Resolver<E, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").field("table", &self.table).finish()
    }
}

/// Build a routing function over `table`.
///
/// ```
/// use apigw_router::{resolve, RouteTable};
/// use serde_json::{json, Value};
///
/// let table: RouteTable<Value, &str, String> = RouteTable::new()
///     .route("/foo", "POST", |_: Value| async { Ok::<_, String>("h1") });
/// let route = resolve(table, |path: &str| format!("missing {path}"));
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let ok = rt.block_on(route(json!({ "path": "/foo", "httpMethod": "POST" })));
/// assert_eq!(ok, Ok("h1"));
/// let err = rt.block_on(route(json!({})));
/// assert_eq!(err, Err("missing undefined".to_string()));
/// ```
pub fn resolve<E, R, T, F>(
    table: impl Into<Arc<RouteTable<E, R, T>>>,
    error_constructor: F,
) -> impl Fn(E) -> HandlerFuture<R, T> + Clone + Send + Sync
where
    E: RouteEvent,
    R: Send + 'static,
    T: Send + 'static,
    F: Fn(&str) -> T + Send + Sync + 'static,
{
    let resolver = Resolver::with_error_constructor(table, error_constructor);
    move |event| resolver.resolve(event)
}
