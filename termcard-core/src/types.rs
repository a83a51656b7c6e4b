//! Core types: the term card and the inbound request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TermCardError};

/// Field names of a term card, in schema order.
pub const TERM_CARD_FIELDS: [&str; 4] = ["english", "pronunciation_ar", "arabic", "description_ar"];

/// The four-field structured result for one term.
///
/// Unknown fields are rejected, so a value of this type always has exactly
/// the `term_card` schema shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermCard {
    /// Corrected / most fitting English name.
    pub english: String,
    /// Approximate pronunciation of the English name in Arabic letters.
    pub pronunciation_ar: String,
    /// Arabic translation or equivalent.
    pub arabic: String,
    /// Short Arabic description, one or two lines.
    pub description_ar: String,
}

impl TermCard {
    /// Parse a term card from raw JSON text.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the text is not a JSON object of the
    /// exact term card shape.
    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Interpret an already-parsed JSON value as a term card.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the value is not of the exact term card shape.
    pub fn from_value(value: &Value) -> std::result::Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// An inbound term request, valid for one handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRequest {
    term: String,
}

impl TermRequest {
    /// Build a request from a raw term. The term is trimmed.
    ///
    /// # Errors
    /// Returns `TermCardError::InvalidInput` if nothing is left after trimming.
    pub fn new(term: &str) -> Result<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(TermCardError::InvalidInput);
        }
        Ok(Self { term: term.to_string() })
    }

    /// Read a request from a raw HTTP body.
    ///
    /// The `term` value is turned into text the way a JavaScript
    /// `String(term || "")` would: falsy values (`null`, `false`, `0`, `""`)
    /// become empty, `true` and non-zero numbers take their text form, and
    /// arrays join their elements with `,`. A non-JSON body, a body without
    /// `term`, and object terms count as empty.
    ///
    /// # Errors
    /// Returns `TermCardError::InvalidInput` when the resulting term is blank.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let raw = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("term").and_then(term_text))
            .unwrap_or_default();
        Self::new(&raw)
    }

    /// The trimmed term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }
}

fn term_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) | Value::Object(_) => None,
        Value::Number(n) if number_is_zero(n) => None,
        Value::String(_) | Value::Bool(true) | Value::Number(_) => Some(element_text(value)),
        Value::Array(items) => Some(join_elements(items)),
    }
}

fn number_is_zero(n: &serde_json::Number) -> bool {
    n.as_f64() == Some(0.0)
}

/// Text of one value as `Array.prototype.join` renders it.
fn element_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => join_elements(items),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn join_elements(items: &[Value]) -> String {
    items.iter().map(element_text).collect::<Vec<_>>().join(",")
}
