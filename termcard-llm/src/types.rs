//! Wire types for the upstream responses endpoint.

use serde::Serialize;
use serde_json::Value;

/// Body of a `POST /v1/responses` call.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    /// Model identifier.
    pub model: String,
    /// Ordered, role-tagged input messages.
    pub input: Vec<InputMessage>,
    /// Structured output constraint.
    pub text: TextConfig,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Who authored an input message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Fixed instructions.
    System,
    /// The caller's term.
    User,
}

/// A single role-tagged input message.
#[derive(Debug, Clone, Serialize)]
pub struct InputMessage {
    /// Message author.
    pub role: Role,
    /// Content parts, in order.
    pub content: Vec<InputContent>,
}

impl InputMessage {
    /// A message with one text part.
    #[must_use]
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![InputContent::InputText { text: text.into() }],
        }
    }
}

/// One part of an input message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputContent {
    /// Plain text.
    InputText {
        /// The text.
        text: String,
    },
}

/// The `text` block of a responses request.
#[derive(Debug, Clone, Serialize)]
pub struct TextConfig {
    /// Output format descriptor.
    pub format: TextFormat,
}

/// Output format descriptor nested under `text.format`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextFormat {
    /// Output constrained to a JSON schema.
    JsonSchema {
        /// Schema name as registered upstream.
        name: String,
        /// Whether the schema is enforced strictly.
        strict: bool,
        /// The JSON schema itself.
        schema: Value,
    },
}
