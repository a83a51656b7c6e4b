//! HTTP rendering of [`TermCardError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use termcard_core::TermCardError;
use tracing::{debug, warn};

/// A [`TermCardError`] on its way back to the caller as a plain-text body.
#[derive(Debug)]
pub struct ApiError(pub TermCardError);

impl From<TermCardError> for ApiError {
    fn from(err: TermCardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_client_error() {
            debug!(status = status.as_u16(), error = %self.0, "request rejected");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}
