//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes manifest (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → stub.rs builds the RouteTable from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Route tables for real handlers are built in code; the manifest only
//!   drives the local tooling

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggingConfig, RouteConfig, RouterConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
