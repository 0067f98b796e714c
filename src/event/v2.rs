//! API Gateway HTTP API (payload format 2.0) events.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::extract::{PathAndMethod, RouteEvent};

/// An HTTP API request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiGatewayV2HttpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_query_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<String>>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub request_context: HttpRequestContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(deserialize_with = "crate::event::null_as_default")]
    pub is_base64_encoded: bool,
}

/// `requestContext` of an HTTP API request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpRequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpDescription>,
}

/// `requestContext.http`: where routing information lives in v2 events.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl RouteEvent for ApiGatewayV2HttpRequest {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        let http = self.request_context.http.as_ref()?;
        PathAndMethod::from_parts(http.path.as_deref(), http.method.as_deref())
    }
}
