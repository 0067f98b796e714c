//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes, addresses)
//! - Detect duplicate routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::RoutePattern;

/// A single semantic problem in a route manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("route #{index}: pattern is empty")]
    EmptyPattern { index: usize },

    #[error("route #{index}: '*' is only allowed at the end of '{pattern}'")]
    MisplacedWildcard { index: usize, pattern: String },

    #[error("route #{index}: method '{method}' must be an uppercase HTTP verb")]
    InvalidMethod { index: usize, method: String },

    #[error("route #{index}: status {status} is outside 100..=599")]
    InvalidStatus { index: usize, status: u16 },

    #[error("route #{index}: {method} {pattern} is already registered")]
    DuplicateRoute {
        index: usize,
        pattern: String,
        method: String,
    },
}

/// Check a manifest, collecting every problem.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.server.bind_address.clone()));
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        validate_route(index, route, &mut errors);

        let key = (RoutePattern::new(&route.pattern), route.method.clone());
        if !route.pattern.is_empty() && !seen.insert(key) {
            errors.push(ValidationError::DuplicateRoute {
                index,
                pattern: route.pattern.clone(),
                method: route.method.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_route(index: usize, route: &RouteConfig, errors: &mut Vec<ValidationError>) {
    if route.pattern.is_empty() {
        errors.push(ValidationError::EmptyPattern { index });
    } else if route.pattern.strip_suffix('*').unwrap_or(&route.pattern).contains('*') {
        errors.push(ValidationError::MisplacedWildcard {
            index,
            pattern: route.pattern.clone(),
        });
    }

    if route.method.is_empty() || !route.method.bytes().all(|b| b.is_ascii_uppercase()) {
        errors.push(ValidationError::InvalidMethod {
            index,
            method: route.method.clone(),
        });
    }

    if !(100..=599).contains(&route.status) {
        errors.push(ValidationError::InvalidStatus {
            index,
            status: route.status,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(routes: Vec<RouteConfig>) -> RouterConfig {
        RouterConfig {
            routes,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = config(vec![
            RouteConfig::new("/foo", "POST"),
            RouteConfig::new("/foo", "GET"),
            RouteConfig::new("/foo/*", "POST"),
        ]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut bad_status = RouteConfig::new("/a", "GET");
        bad_status.status = 42;
        let mut config = config(vec![
            RouteConfig::new("", "GET"),
            RouteConfig::new("/a*b", "post"),
            bad_status,
        ]);
        config.server.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("not-an-address".into()),
                ValidationError::EmptyPattern { index: 0 },
                ValidationError::MisplacedWildcard {
                    index: 1,
                    pattern: "/a*b".into()
                },
                ValidationError::InvalidMethod {
                    index: 1,
                    method: "post".into()
                },
                ValidationError::InvalidStatus { index: 2, status: 42 },
            ]
        );
    }

    #[test]
    fn test_duplicate_after_normalization() {
        let config = config(vec![
            RouteConfig::new("foo/*", "GET"),
            RouteConfig::new("/foo/*", "GET"),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("already registered"));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidStatus { index: 3, status: 700 };
        assert_eq!(err.to_string(), "route #3: status 700 is outside 100..=599");
    }
}
