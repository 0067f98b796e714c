//! API Gateway event router.
//!
//! Routes API Gateway events (REST API v1 and HTTP API v2 payloads) to one of
//! several handlers behind a single Lambda entry point.
//!
//! # Data Flow
//! ```text
//! raw event
//!     → event (extract path + method)
//!     → routing (best pattern, then method)
//!     → handler future, or the caller's not-found value
//! ```
//!
//! # Example
//! ```
//! use apigw_router::{Resolver, RouteTable};
//! use serde_json::{json, Value};
//!
//! let table: RouteTable<Value, String, String> = RouteTable::new()
//!     .route("/users/*", "GET", |_: Value| async { Ok::<_, String>("list".to_string()) })
//!     .route("/users/me", "GET", |_: Value| async { Ok::<_, String>("me".to_string()) });
//! let resolver = Resolver::new(table);
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let event = json!({ "requestContext": { "http": { "method": "GET", "path": "/users/me" } } });
//! assert_eq!(rt.block_on(resolver.resolve(event)), Ok("me".to_string()));
//! ```

pub mod config;
pub mod event;
pub mod handler;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resolver;
pub mod routing;
pub mod stub;

pub use event::{AnyApiGatewayEvent, EventFormat, PathAndMethod, RouteEvent};
pub use handler::{BoxHandler, Handler, HandlerFuture};
pub use resolver::{resolve, ErrorConstructor, Resolver, RouteNotFound};
pub use routing::{MethodTable, RoutePattern, RouteTable};
