//! HTTP mapping of [`Error`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::{Error, ValidationError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// 401 for a refused secret or key, 400 for a malformed update,
/// 500 for everything else.
fn status(err: &Error) -> StatusCode {
    match err {
        e if e.is_unauthorized() => StatusCode::UNAUTHORIZED,
        Error::Validation(ValidationError::InvalidUpdate(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status(&self);
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
