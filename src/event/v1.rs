//! API Gateway REST API (payload format 1.0) events.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::extract::{PathAndMethod, RouteEvent};

/// A REST API proxy integration request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiGatewayProxyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub multi_value_headers: HashMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub request_context: ProxyRequestContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub is_base64_encoded: bool,
}

/// `requestContext` of a REST API request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProxyRequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_time_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ProxyRequestIdentity>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProxyRequestIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl RouteEvent for ApiGatewayProxyRequest {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        PathAndMethod::from_parts(self.path.as_deref(), self.http_method.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_rest_event() {
        let event: ApiGatewayProxyRequest = serde_json::from_value(json!({
            "resource": "/{proxy+}",
            "path": "/foo/bar",
            "httpMethod": "POST",
            "headers": { "content-type": "application/json" },
            "queryStringParameters": null,
            "requestContext": { "requestId": "abc", "stage": "prod" },
            "body": "{}",
            "isBase64Encoded": false
        }))
        .unwrap();

        assert_eq!(event.path.as_deref(), Some("/foo/bar"));
        assert_eq!(event.request_context.request_id.as_deref(), Some("abc"));
        assert_eq!(event.path_and_method(), Some(PathAndMethod::new("/foo/bar", "POST")));
    }

    #[test]
    fn test_missing_method() {
        let event = ApiGatewayProxyRequest {
            path: Some("/foo".into()),
            ..Default::default()
        };
        assert_eq!(event.path_and_method(), None);
    }
}
