//! Request events.
//!
//! # Data Flow
//! ```text
//! Lambda invocation payload (JSON)
//!     → v1.rs / v2.rs (typed API Gateway shapes)
//!     → extract.rs (shape detection, path + method)
//!     → PathAndMethod handed to the routing layer
//! ```
//!
//! # Design Decisions
//! - Raw `serde_json::Value` events are routable without deserializing
//! - Typed events are optional conveniences over the same rules

pub mod extract;
pub mod v1;
pub mod v2;

pub use extract::{extract, is_v2_event, PathAndMethod, RouteEvent};
pub use v1::ApiGatewayProxyRequest;
pub use v2::ApiGatewayV2HttpRequest;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// API Gateway sends `null` for empty maps; read it as the default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload format of an API Gateway event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFormat {
    V1,
    #[default]
    V2,
}

impl fmt::Display for EventFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventFormat::V1 => f.write_str("v1"),
            EventFormat::V2 => f.write_str("v2"),
        }
    }
}

impl FromStr for EventFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1.0" => Ok(EventFormat::V1),
            "v2" | "2.0" => Ok(EventFormat::V2),
            other => Err(format!("unknown event format '{other}' (expected v1 or v2)")),
        }
    }
}

/// Errors reading an event from disk.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to read event file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a raw JSON event from a file.
pub fn load_event(path: &Path) -> Result<Value, EventError> {
    let content = std::fs::read_to_string(path)?;
    let event = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Event loaded");
    Ok(event)
}

/// Either API Gateway payload format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyApiGatewayEvent {
    V1(ApiGatewayProxyRequest),
    V2(ApiGatewayV2HttpRequest),
}

impl AnyApiGatewayEvent {
    /// Decode a raw event, picking the shape with the same rule the
    /// extractor uses.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if is_v2_event(&value) {
            serde_json::from_value(value).map(AnyApiGatewayEvent::V2)
        } else {
            serde_json::from_value(value).map(AnyApiGatewayEvent::V1)
        }
    }

    pub fn format(&self) -> EventFormat {
        match self {
            AnyApiGatewayEvent::V1(_) => EventFormat::V1,
            AnyApiGatewayEvent::V2(_) => EventFormat::V2,
        }
    }
}

impl<'de> Deserialize<'de> for AnyApiGatewayEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        AnyApiGatewayEvent::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl RouteEvent for AnyApiGatewayEvent {
    fn path_and_method(&self) -> Option<PathAndMethod> {
        match self {
            AnyApiGatewayEvent::V1(event) => event.path_and_method(),
            AnyApiGatewayEvent::V2(event) => event.path_and_method(),
        }
    }
}
