//! Configuration schema definitions.
//!
//! This module defines the route manifest used by the local tooling.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::EventFormat;

/// Root configuration: emulator settings plus stub routes.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Local emulator settings.
    pub server: ServerConfig,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Stub routes, in registration order.
    pub routes: Vec<RouteConfig>,
}

/// Local emulator configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,

    /// Payload format of the events handed to the resolver.
    pub event_format: EventFormat,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            event_format: EventFormat::V2,
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// A stub route: pattern + method answered with a canned response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RouteConfig {
    /// Route pattern, exact (`/foo`) or trailing wildcard (`/foo/*`).
    pub pattern: String,

    /// HTTP method, uppercase.
    pub method: String,

    /// Response status.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body.
    #[serde(default)]
    pub body: String,

    /// Response headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// When set, the handler fails with this message instead of responding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteConfig {
    /// A successful stub with an empty body.
    pub fn new(pattern: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            method: method.into(),
            status: default_status(),
            body: String::new(),
            headers: HashMap::new(),
            error: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

fn default_status() -> u16 {
    200
}
