//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use apigw_router::config::{RouteConfig, RouterConfig};
use apigw_router::event::EventFormat;
use apigw_router::http::EmulatorServer;
use apigw_router::lifecycle::Shutdown;
use apigw_router::HandlerFuture;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A running emulator bound to an ephemeral port.
pub struct TestEmulator {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestEmulator {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("emulator did not stop")
            .unwrap()
            .unwrap();
    }
}

/// Start an emulator for `routes` speaking `format` events.
pub async fn start_emulator(routes: Vec<RouteConfig>, format: EventFormat) -> TestEmulator {
    let mut config = RouterConfig {
        routes,
        ..Default::default()
    };
    config.server.event_format = format;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();

    let server = EmulatorServer::new(&config);
    let handle = tokio::spawn(server.run(listener, shutdown.clone()));

    TestEmulator {
        addr,
        shutdown,
        handle,
    }
}

/// REST API (v1) event.
pub fn v1_event(method: &str, path: &str) -> Value {
    json!({
        "resource": "/{proxy+}",
        "path": path,
        "httpMethod": method,
        "headers": null,
        "requestContext": { "requestId": "req-v1", "stage": "prod" }
    })
}

/// HTTP API (v2) event.
pub fn v2_event(method: &str, path: &str) -> Value {
    json!({
        "version": "2.0",
        "routeKey": "$default",
        "rawPath": path,
        "requestContext": {
            "requestId": "req-v2",
            "http": { "method": method, "path": path }
        }
    })
}

/// Handler that answers with a fixed label.
pub fn label(name: &'static str) -> impl Fn(Value) -> HandlerFuture<&'static str, String> + Send + Sync + 'static {
    move |_event| -> HandlerFuture<&'static str, String> { Box::pin(async move { Ok(name) }) }
}

/// Handler that records every event it receives.
pub fn recorder(
    calls: Arc<Mutex<Vec<Value>>>,
) -> impl Fn(Value) -> HandlerFuture<&'static str, String> + Send + Sync + 'static {
    move |event| -> HandlerFuture<&'static str, String> {
        calls.lock().unwrap().push(event);
        Box::pin(async { Ok("recorded") })
    }
}
