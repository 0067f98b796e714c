//! Path and method extraction from raw events.
//!
//! # Responsibilities
//! - Recognize the v2 (HTTP API) shape versus the v1 (REST API) shape
//! - Pull a `(path, method)` pair out of either
//!
//! # Design Decisions
//! - v2 only when the top-level `path` is missing and
//!   `requestContext.http.path` is present; v1 otherwise
//! - A field counts as present only when it is a non-empty string. A
//!   non-string top-level `path` (a number, an object) is therefore absent
//!   and does not block the v2 shape; such an event routes on
//!   `requestContext.http` when that is present

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized routing input extracted from an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAndMethod {
    pub path: String,
    pub method: String,
}

impl PathAndMethod {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }

    /// Build a pair only when both fields are present.
    pub(crate) fn from_parts(path: Option<&str>, method: Option<&str>) -> Option<Self> {
        let path = path.filter(|p| !p.is_empty())?;
        let method = method.filter(|m| !m.is_empty())?;
        Some(Self::new(path, method))
    }
}

/// An event the resolver can route.
pub trait RouteEvent {
    /// The request path and method, or `None` when either is missing.
    fn path_and_method(&self) -> Option<PathAndMethod>;
}

/// Run the extractor on any routable event.
pub fn extract<E: RouteEvent + ?Sized>(event: &E) -> Option<PathAndMethod> {
    event.path_and_method()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn v2_http(event: &Value) -> Option<&Value> {
    event.get("requestContext")?.get("http")
}

/// Whether a raw JSON event has the v2 shape.
pub fn is_v2_event(event: &Value) -> bool {
    non_empty_str(event.get("path")).is_none()
        && non_empty_str(v2_http(event).and_then(|http| http.get("path"))).is_some()
}

impl RouteEvent for Value {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        if is_v2_event(self) {
            let http = v2_http(self)?;
            PathAndMethod::from_parts(
                non_empty_str(http.get("path")),
                non_empty_str(http.get("method")),
            )
        } else {
            PathAndMethod::from_parts(
                non_empty_str(self.get("path")),
                non_empty_str(self.get("httpMethod")),
            )
        }
    }
}

impl<E: RouteEvent + ?Sized> RouteEvent for &E {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        (**self).path_and_method()
    }
}

impl<E: RouteEvent + ?Sized> RouteEvent for std::sync::Arc<E> {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        (**self).path_and_method()
    }
}

impl RouteEvent for PathAndMethod {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        PathAndMethod::from_parts(Some(&self.path), Some(&self.method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v2_event() {
        let event = json!({
            "requestContext": { "http": { "method": "POST", "path": "/bar" } }
        });
        assert!(is_v2_event(&event));
        assert_eq!(extract(&event), Some(PathAndMethod::new("/bar", "POST")));
    }

    #[test]
    fn test_v1_event() {
        let event = json!({ "path": "/bar", "httpMethod": "GET" });
        assert!(!is_v2_event(&event));
        assert_eq!(extract(&event), Some(PathAndMethod::new("/bar", "GET")));
    }

    #[test]
    fn test_missing_path() {
        assert_eq!(extract(&json!({})), None);
    }

    #[test]
    fn test_v2_event_with_empty_request_context() {
        assert_eq!(extract(&json!({ "requestContext": {} })), None);
    }

    #[test]
    fn test_v2_event_without_method() {
        let event = json!({ "requestContext": { "http": { "path": "/bar" } } });
        assert!(is_v2_event(&event));
        assert_eq!(extract(&event), None);
    }

    #[test]
    fn test_v1_event_without_method() {
        assert_eq!(extract(&json!({ "path": "/bar" })), None);
    }

    #[test]
    fn test_top_level_path_wins_over_request_context() {
        let event = json!({
            "path": "/v1",
            "httpMethod": "GET",
            "requestContext": { "http": { "method": "POST", "path": "/v2" } }
        });
        assert!(!is_v2_event(&event));
        assert_eq!(extract(&event), Some(PathAndMethod::new("/v1", "GET")));
    }

    #[test]
    fn test_empty_top_level_path_falls_through_to_v2() {
        let event = json!({
            "path": "",
            "requestContext": { "http": { "method": "DELETE", "path": "/v2" } }
        });
        assert_eq!(extract(&event), Some(PathAndMethod::new("/v2", "DELETE")));
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        assert_eq!(extract(&json!({ "path": 42, "httpMethod": "GET" })), None);
        assert_eq!(extract(&json!({ "path": "/x", "httpMethod": null })), None);
    }

    #[test]
    fn test_non_string_top_level_path_falls_through_to_v2() {
        let event = json!({
            "path": 42,
            "httpMethod": "GET",
            "requestContext": { "http": { "method": "POST", "path": "/v2" } }
        });
        assert!(is_v2_event(&event));
        assert_eq!(extract(&event), Some(PathAndMethod::new("/v2", "POST")));
    }
}
