//! Request handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Serialize;
use termcard_core::{TermCard, TermCardError, TermRequest};

use crate::{AppState, ApiError};

/// `POST /api/generate` — one term in, one term card out.
///
/// The body is read as raw bytes so callers need not send a JSON
/// content type. The credential is checked before the body is looked at.
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TermCard>, ApiError> {
    state.generator.credential()?;
    let request = TermRequest::from_body(&body)?;
    let card = state.generator.generate_for(&request).await?;
    Ok(Json(card))
}

/// Any method other than `POST` on the generate path.
pub async fn method_not_allowed() -> ApiError {
    ApiError(TermCardError::MethodNotAllowed)
}

/// Liveness check body.
#[derive(Debug, Serialize)]
pub struct Health {
    ok: bool,
    service: &'static str,
}

/// `GET /healthz`.
pub async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: "termcard",
    })
}
