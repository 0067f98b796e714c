//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem for the binary
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - `RUST_LOG` wins over the configured level
//! - Library code only emits events; it never installs a subscriber

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when neither `RUST_LOG` nor the config yields a valid one.
const FALLBACK_FILTER: &str = "apigw_router=info,tower_http=info";

/// Build the filter: `RUST_LOG` first, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// A bare level applies to this crate and tower-http; anything else is used
/// as a full directive.
fn directive(level: &str) -> String {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => {
            format!("apigw_router={level},tower_http={level}")
        }
        other => other.to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}
