//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the catch-all emulator handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Convert each request into an event and resolve it
//! - Serve until the shutdown signal fires

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{RouterConfig, ServerConfig};
use crate::event::EventFormat;
use crate::http::request::{build_event, request_id, X_REQUEST_ID};
use crate::http::response::into_response;
use crate::lifecycle::Shutdown;
use crate::resolver::Resolver;
use crate::stub::{resolver_from_config, StubError, StubResponse};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver<Value, StubResponse, StubError>,
    pub event_format: EventFormat,
    pub max_body_bytes: usize,
}

/// Local API Gateway emulator over a stub route table.
pub struct EmulatorServer {
    router: Router,
    config: ServerConfig,
}

impl EmulatorServer {
    /// Create a server for the manifest's routes and server settings.
    pub fn new(config: &RouterConfig) -> Self {
        let state = AppState {
            resolver: resolver_from_config(config),
            event_format: config.server.event_format,
            max_body_bytes: config.server.max_body_bytes,
        };

        tracing::info!(
            routes = state.resolver.table().len(),
            event_format = %state.event_format,
            "Route table built"
        );

        let router = Self::build_router(&config.server, state);
        Self {
            router,
            config: config.server.clone(),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let x_request_id = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/", any(emulate))
            .route("/{*path}", any(emulate))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(x_request_id))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs))),
            )
    }

    /// The router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` is triggered.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Emulator listening");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.notified())
            .await?;

        tracing::info!("Emulator stopped");
        Ok(())
    }
}

/// Catch-all handler: HTTP request → event → resolver → HTTP response.
async fn emulate(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let request_id = request_id(&parts.headers);

    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Request body rejected");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    let event = build_event(state.event_format, &parts, &body, &request_id);

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        path = %parts.uri.path(),
        "Emulating request"
    );

    into_response(state.resolver.resolve(event).await)
}

impl std::fmt::Debug for EmulatorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmulatorServer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
