//! Local API Gateway emulator.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → request.rs (HTTP request → v1 / v2 event JSON)
//!     → Resolver over the stub route table
//!     → response.rs (handler outcome → HTTP response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{build_event, X_REQUEST_ID};
pub use server::EmulatorServer;
