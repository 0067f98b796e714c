//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn a stub handler outcome into an HTTP response
//! - Map not-found and handler failures to status codes
//!
//! # Design Decisions
//! - Failures use the API Gateway JSON body shape: `{"message": ...}`
//! - Invalid configured headers are dropped with a warning, not fatal

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::stub::{StubError, StubResponse};

/// Convert a resolver outcome into the emulator's HTTP response.
pub fn into_response(outcome: Result<StubResponse, StubError>) -> Response {
    match outcome {
        Ok(stub) => success(stub),
        Err(err) => failure(&err),
    }
}

fn success(stub: StubResponse) -> Response {
    let status = status_code(stub.status_code);
    let mut response = (status, stub.body).into_response();

    for (name, value) in &stub.headers {
        match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }
    response
}

fn failure(err: &StubError) -> Response {
    let status = status_code(err.status());
    (status, Json(json!({ "message": err.to_string() }))).into_response()
}

fn status_code(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
