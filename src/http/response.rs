//! Error responses.
//!
//! Client mistakes become a bare `400 Bad Request` and render failures a
//! bare `500 Internal Server Error`. Details go to the log, never the body.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cart::CartError;
use crate::observability::metrics;
use crate::view::RenderError;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or mistyped form submission.
    #[error("malformed form submission: {0}")]
    Decode(#[from] FormRejection),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("render failure: {0}")]
    Render(#[from] RenderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::Cart(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "decode_error",
            ApiError::Cart(e) => e.reason(),
            ApiError::Render(_) => "render_failure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        metrics::record_rejection(self.reason());

        if status.is_server_error() {
            tracing::error!(error = %self, "Failed to render cart");
        } else {
            tracing::warn!(error = %self, reason = self.reason(), "Request rejected");
        }

        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}
