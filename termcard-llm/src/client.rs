//! Term card generator — one structured-output call per term.

use std::time::Instant;

use reqwest::Client;
use serde_json::Value;
use termcard_core::error::{Result, TermCardError};
use termcard_core::{TermCard, TermRequest, UpstreamConfig};
use tracing::{debug, info, warn};

use crate::extract::Extractor;
use crate::prompt;

/// Calls the upstream responses endpoint and turns its answer into a
/// [`TermCard`].
///
/// Holds no per-request state; share one instance (behind an `Arc`) across
/// all requests. Every call to [`generate`](Self::generate) that passes
/// validation makes exactly one outbound request: no retries, no caching.
#[derive(Debug)]
pub struct TermCardGenerator {
    http: Client,
    upstream: UpstreamConfig,
    extractor: Extractor,
}

impl TermCardGenerator {
    /// Create a generator for the given upstream settings.
    #[must_use]
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self {
            http: Client::new(),
            upstream,
            extractor: Extractor::default(),
        }
    }

    /// Replace the extraction pipeline.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The bearer credential.
    ///
    /// # Errors
    /// Returns `TermCardError::MissingCredential` if none was configured.
    pub fn credential(&self) -> Result<&str> {
        self.upstream
            .api_key
            .as_deref()
            .ok_or_else(|| TermCardError::MissingCredential {
                env_var: self.upstream.api_key_env.clone(),
            })
    }

    /// Generate a term card for a raw term.
    ///
    /// The credential is checked before the term, and both before any
    /// network traffic.
    ///
    /// # Errors
    /// `MissingCredential`, `InvalidInput`, then whatever
    /// [`generate_for`](Self::generate_for) returns.
    pub async fn generate(&self, term: &str) -> Result<TermCard> {
        self.credential()?;
        let request = TermRequest::new(term)?;
        self.generate_for(&request).await
    }

    /// Generate a term card for an already validated request.
    ///
    /// # Errors
    /// - `MissingCredential` if no credential is configured.
    /// - `Upstream` with the verbatim body on a non-2xx answer.
    /// - `MalformedModelOutput` if no term card can be extracted.
    /// - `Internal` on transport failure or an undecodable success body.
    pub async fn generate_for(&self, request: &TermRequest) -> Result<TermCard> {
        let api_key = self.credential()?;
        let payload = prompt::build_request(&self.upstream.model, request);

        let start = Instant::now();
        let body = self.call_upstream(api_key, &payload).await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        let card = self.extractor.card(&body).inspect_err(|_| {
            warn!(model = %self.upstream.model, latency_ms, "model output is not a term card");
        })?;

        info!(model = %self.upstream.model, latency_ms, english = %card.english, "term card generated");
        Ok(card)
    }

    async fn call_upstream(
        &self,
        api_key: &str,
        payload: &crate::types::ResponsesRequest,
    ) -> Result<Value> {
        let url = self.upstream.responses_url();
        debug!(%url, model = %payload.model, "calling upstream");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.map_err(transport)?;
            warn!(status = status.as_u16(), "upstream returned error");
            return Err(TermCardError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<Value>().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> TermCardError {
    warn!(error = %err, "upstream request failed");
    TermCardError::Internal(err.to_string())
}
