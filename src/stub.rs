//! Manifest-backed stub handlers.
//!
//! Turns the `[[routes]]` of a [`RouterConfig`] into a [`RouteTable`] whose
//! handlers answer with canned responses. Used by the CLI and the local
//! emulator.

use std::collections::HashMap;

use futures_util::future::{self, Ready};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::{RouteConfig, RouterConfig};
use crate::resolver::{Resolver, RouteNotFound};
use crate::routing::RouteTable;

/// Success value of a stub handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Failure value of a stub table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError {
    /// No route, or no method under the matched route.
    #[error(transparent)]
    NotFound(#[from] RouteNotFound),

    /// A route configured to fail.
    #[error("{message}")]
    Handler { status: u16, message: String },
}

impl StubError {
    /// HTTP status the emulator answers with. Failing routes configured
    /// with a non-error status answer 500.
    pub fn status(&self) -> u16 {
        match self {
            StubError::NotFound(_) => 404,
            StubError::Handler { status, .. } if *status >= 400 => *status,
            StubError::Handler { .. } => 500,
        }
    }
}

pub type StubTable = RouteTable<Value, StubResponse, StubError>;

type StubOutcome = Result<StubResponse, StubError>;

fn stub_handler(route: &RouteConfig) -> impl Fn(Value) -> Ready<StubOutcome> + Send + Sync + 'static {
    let outcome = match &route.error {
        Some(message) => Err(StubError::Handler {
            status: route.status,
            message: message.clone(),
        }),
        None => Ok(StubResponse {
            status_code: route.status,
            headers: route.headers.clone(),
            body: route.body.clone(),
        }),
    };
    move |_event| future::ready(outcome.clone())
}

/// Build a route table from the manifest routes, in manifest order.
pub fn table_from_config(config: &RouterConfig) -> StubTable {
    config
        .routes
        .iter()
        .fold(RouteTable::new(), |table, route| {
            table.route(&route.pattern, route.method.clone(), stub_handler(route))
        })
}

/// Resolver over the manifest routes with the default not-found value.
pub fn resolver_from_config(config: &RouterConfig) -> Resolver<Value, StubResponse, StubError> {
    Resolver::new(table_from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> RouterConfig {
        RouterConfig {
            routes: vec![
                RouteConfig::new("/foo/*", "POST").with_body("wildcard"),
                RouteConfig::new("/foo/one", "POST").with_body("exact").with_status(201),
                RouteConfig::new("/boom", "GET").with_status(502).with_error("exploded"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_table_from_config() {
        let table = table_from_config(&config());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("/foo/one").unwrap().methods(), vec!["POST"]);
    }

    #[tokio::test]
    async fn test_stub_response() {
        let resolver = resolver_from_config(&config());
        let event = json!({ "path": "/foo/one", "httpMethod": "POST" });
        let response = resolver.resolve(event).await.unwrap();
        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, "exact");
    }

    #[tokio::test]
    async fn test_stub_error() {
        let resolver = resolver_from_config(&config());
        let event = json!({ "requestContext": { "http": { "method": "GET", "path": "/boom" } } });
        let err = resolver.resolve(event).await.unwrap_err();
        assert_eq!(err.status(), 502);
        assert_eq!(err.to_string(), "exploded");
    }

    #[test]
    fn test_failing_route_with_success_status() {
        let err = StubError::Handler {
            status: 200,
            message: "oops".into(),
        };
        assert_eq!(err.status(), 500);
    }

    #[tokio::test]
    async fn test_not_found() {
        let resolver = resolver_from_config(&config());
        let err = resolver.resolve(json!({ "path": "/nope", "httpMethod": "GET" })).await.unwrap_err();
        assert_eq!(err, StubError::NotFound(RouteNotFound::new("/nope")));
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "No route found for /nope");
    }
}
