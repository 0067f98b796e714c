//! Request handling and transformation.
//!
//! # Responsibilities
//! - Read the request ID set by the middleware
//! - Turn an HTTP request into a v1 or v2 API Gateway event
//!
//! # Design Decisions
//! - Events are built through the typed structs and serialized, so the
//!   emulator emits exactly what the extractor understands
//! - Non-UTF-8 bodies are passed lossily; the emulator never base64-encodes

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{ConnectInfo, Query};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use serde_json::Value;

use crate::event::v1::{ProxyRequestContext, ProxyRequestIdentity};
use crate::event::v2::{HttpDescription, HttpRequestContext};
use crate::event::{ApiGatewayProxyRequest, ApiGatewayV2HttpRequest, EventFormat};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Stage name reported in emulated events.
const STAGE: &str = "$default";

/// The request ID assigned by the middleware, or a fresh one.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Build the API Gateway event for a request.
pub fn build_event(format: EventFormat, parts: &Parts, body: &[u8], request_id: &str) -> Value {
    let event = match format {
        EventFormat::V1 => serde_json::to_value(build_v1_event(parts, body, request_id)),
        EventFormat::V2 => serde_json::to_value(build_v2_event(parts, body, request_id)),
    };
    event.unwrap_or(Value::Null)
}

/// REST API (v1) event.
pub fn build_v1_event(parts: &Parts, body: &[u8], request_id: &str) -> ApiGatewayProxyRequest {
    let path = parts.uri.path().to_string();
    let method = parts.method.to_string();

    ApiGatewayProxyRequest {
        resource: Some("/{proxy+}".to_string()),
        path: Some(path.clone()),
        http_method: Some(method.clone()),
        headers: single_value_headers(&parts.headers),
        multi_value_headers: multi_value_headers(&parts.headers),
        query_string_parameters: query_parameters(parts),
        path_parameters: None,
        request_context: ProxyRequestContext {
            request_id: Some(request_id.to_string()),
            stage: Some(STAGE.to_string()),
            path: Some(path),
            http_method: Some(method),
            request_time_epoch: Some(epoch_millis()),
            identity: Some(ProxyRequestIdentity {
                source_ip: source_ip(parts),
                user_agent: user_agent(&parts.headers),
            }),
        },
        body: body_text(body),
        is_base64_encoded: false,
    }
}

/// HTTP API (v2) event.
pub fn build_v2_event(parts: &Parts, body: &[u8], request_id: &str) -> ApiGatewayV2HttpRequest {
    let path = parts.uri.path().to_string();

    ApiGatewayV2HttpRequest {
        version: Some("2.0".to_string()),
        route_key: Some("$default".to_string()),
        raw_path: Some(path.clone()),
        raw_query_string: Some(parts.uri.query().unwrap_or_default().to_string()),
        cookies: cookies(&parts.headers),
        headers: single_value_headers(&parts.headers),
        query_string_parameters: query_parameters(parts),
        request_context: HttpRequestContext {
            request_id: Some(request_id.to_string()),
            stage: Some(STAGE.to_string()),
            time_epoch: Some(epoch_millis()),
            http: Some(HttpDescription {
                method: Some(parts.method.to_string()),
                path: Some(path),
                protocol: Some(format!("{:?}", parts.version)),
                source_ip: source_ip(parts),
                user_agent: user_agent(&parts.headers),
            }),
        },
        body: body_text(body),
        is_base64_encoded: false,
    }
}

/// Headers with repeated values joined by `,`, as API Gateway does.
fn single_value_headers(headers: &HeaderMap) -> HashMap<String, String> {
    multi_value_headers(headers)
        .into_iter()
        .map(|(name, values)| (name, values.join(",")))
        .collect()
}

fn multi_value_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            out.entry(name.as_str().to_string())
                .or_default()
                .push(value.to_string());
        }
    }
    out
}

fn cookies(headers: &HeaderMap) -> Option<Vec<String>> {
    let cookies: Vec<String> = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect();
    (!cookies.is_empty()).then_some(cookies)
}

fn query_parameters(parts: &Parts) -> Option<HashMap<String, String>> {
    Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .ok()
        .map(|Query(params)| params)
        .filter(|params| !params.is_empty())
}

fn source_ip(parts: &Parts) -> Option<String> {
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn body_text(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(body).into_owned())
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{extract, PathAndMethod};
    use axum::http::Request;

    fn parts(method: &str, uri: &str) -> Parts {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("cookie", "a=1; b=2")
            .header("x-multi", "one")
            .header("x-multi", "two")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_v1_event_is_routable() {
        let event = build_event(EventFormat::V1, &parts("POST", "/foo/one?x=1"), b"hi", "req-1");
        assert_eq!(extract(&event), Some(PathAndMethod::new("/foo/one", "POST")));
        assert_eq!(event["requestContext"]["requestId"], "req-1");
        assert_eq!(event["queryStringParameters"]["x"], "1");
        assert_eq!(event["body"], "hi");
        assert_eq!(event["headers"]["x-multi"], "one,two");
        assert_eq!(event["multiValueHeaders"]["x-multi"][1], "two");
    }

    #[test]
    fn test_v2_event_is_routable() {
        let event = build_event(EventFormat::V2, &parts("GET", "/bar?y=2"), b"", "req-2");
        assert_eq!(extract(&event), Some(PathAndMethod::new("/bar", "GET")));
        assert_eq!(event["rawQueryString"], "y=2");
        assert_eq!(event["cookies"][1], "b=2");
        assert!(event.get("path").is_none());
        assert!(event.get("body").is_none());
    }

    #[test]
    fn test_request_id_falls_back_to_uuid() {
        let id = request_id(&HeaderMap::new());
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
