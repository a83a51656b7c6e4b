//! Error types for the term card service.

use thiserror::Error;

/// Every way a term card request can fail.
///
/// The `Display` text of each variant is exactly the body sent back to the
/// HTTP caller, so upstream bodies and exception messages pass through
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermCardError {
    /// The endpoint was called with something other than `POST`.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The API credential is absent from the configured environment variable.
    #[error("Missing {env_var} in environment variables.")]
    MissingCredential {
        /// Name of the variable that should hold the credential.
        env_var: String,
    },

    /// The term was absent, empty, or whitespace-only.
    #[error("Missing term.")]
    InvalidInput,

    /// The upstream API answered with a non-2xx status.
    #[error("{body}")]
    Upstream {
        /// Upstream status code, kept for logging.
        status: u16,
        /// Upstream response body, verbatim.
        body: String,
    },

    /// No strategy produced text that parses as a term card, and the
    /// structured fallback was absent or unusable.
    #[error("Failed to parse model JSON.")]
    MalformedModelOutput,

    /// Transport failures, undecodable upstream bodies, anything else.
    #[error("{0}")]
    Internal(String),
}

impl TermCardError {
    /// HTTP status code this error maps to.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::InvalidInput => 400,
            Self::MissingCredential { .. }
            | Self::Upstream { .. }
            | Self::MalformedModelOutput
            | Self::Internal(_) => 500,
        }
    }

    /// Whether the caller, rather than the environment, is at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, TermCardError>;
