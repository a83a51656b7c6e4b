//! # termcard-server — HTTP surface for the term card service
//!
//! ```text
//! POST /api/generate  {"term": "..."}  ──▶  200 TermCard JSON
//!                                      ──▶  4xx/5xx plain text
//! *    /api/generate                   ──▶  405 Method Not Allowed
//! GET  /healthz                        ──▶  200 {"ok": true, ...}
//! ```
//!
//! ## Modules
//!
//! - `handlers` — request handlers
//! - `error` — [`ApiError`], the error → status/body mapping

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use termcard_llm::TermCardGenerator;

pub use error::ApiError;

/// Path of the term card endpoint.
pub const GENERATE_PATH: &str = "/api/generate";

/// Path of the liveness check.
pub const HEALTH_PATH: &str = "/healthz";

/// State shared by every handler invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The generator, built once at start-up from the loaded configuration.
    pub generator: Arc<TermCardGenerator>,
}

impl AppState {
    /// Wrap a generator for sharing across requests.
    #[must_use]
    pub fn new(generator: TermCardGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            GENERATE_PATH,
            post(handlers::generate).fallback(handlers::method_not_allowed),
        )
        .route(HEALTH_PATH, get(handlers::health))
        .with_state(state)
}
