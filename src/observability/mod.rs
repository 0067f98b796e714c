//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! resolver / emulator / CLI produce:
//!     → tracing events (path, method, pattern, miss reason, request id)
//!     → logging.rs (filter + fmt layer, plain or JSON)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields, never interpolated strings, on hot-path events
//! - Request ID flows from the emulator into the event and the logs

pub mod logging;

pub use logging::init_logging;
