//! Response extraction — upstream JSON body → [`TermCard`].
//!
//! The upstream may hand back the generated text in more than one place.
//! An [`Extractor`] holds an ordered list of [`TextStrategy`] values; the
//! first one that yields non-empty text wins. That text must parse as a
//! term card. If it does not, the pre-parsed `output_parsed` field is tried
//! as a last resort before giving up with `MalformedModelOutput`.

use std::fmt;

use serde_json::Value;
use termcard_core::error::{Result, TermCardError};
use termcard_core::TermCard;
use tracing::debug;

/// Fragment type marking model output text.
pub const OUTPUT_TEXT: &str = "output_text";

/// Response field holding an already-parsed structured result.
pub const STRUCTURED_FALLBACK_FIELD: &str = "output_parsed";

/// One way of pulling generated text out of an upstream response.
pub trait TextStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The generated text, or `None` when this strategy finds nothing.
    fn extract(&self, response: &Value) -> Option<String>;
}

/// Reads the pre-aggregated top-level `output_text` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatedText;

impl TextStrategy for AggregatedText {
    fn name(&self) -> &'static str {
        "aggregated_text"
    }

    fn extract(&self, response: &Value) -> Option<String> {
        response
            .get(OUTPUT_TEXT)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// Walks `output[*].content[*]` and concatenates every `output_text`
/// fragment in order. Fragments are neither deduplicated nor reordered.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFragments;

impl TextStrategy for OutputFragments {
    fn name(&self) -> &'static str {
        "output_fragments"
    }

    fn extract(&self, response: &Value) -> Option<String> {
        let items = response.get("output")?.as_array()?;

        let text: String = items
            .iter()
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten()
            .filter(|fragment| fragment.get("type").and_then(Value::as_str) == Some(OUTPUT_TEXT))
            .filter_map(|fragment| fragment.get("text").and_then(Value::as_str))
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

/// Ordered extraction pipeline.
pub struct Extractor {
    strategies: Vec<Box<dyn TextStrategy>>,
}

impl Extractor {
    /// An extractor trying `strategies` in the given order.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn TextStrategy>>) -> Self {
        Self { strategies }
    }

    /// Text from the first strategy that finds any, with that strategy's name.
    #[must_use]
    pub fn text(&self, response: &Value) -> Option<(&'static str, String)> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.extract(response).map(|text| (strategy.name(), text)))
    }

    /// Extract a term card from an upstream response body.
    ///
    /// # Errors
    /// Returns `TermCardError::MalformedModelOutput` when neither the extracted
    /// text nor the structured fallback field is a valid term card.
    pub fn card(&self, response: &Value) -> Result<TermCard> {
        match self.text(response) {
            Some((strategy, text)) => match TermCard::from_json_str(&text) {
                Ok(card) => {
                    debug!(strategy, "term card extracted");
                    return Ok(card);
                }
                Err(e) => debug!(strategy, error = %e, "extracted text is not a term card"),
            },
            None => debug!("no extraction strategy produced text"),
        }

        response
            .get(STRUCTURED_FALLBACK_FIELD)
            .and_then(|parsed| TermCard::from_value(parsed).ok())
            .inspect(|_| debug!("term card taken from structured fallback"))
            .ok_or(TermCardError::MalformedModelOutput)
    }

    /// Names of the installed strategies, in order.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![Box::new(AggregatedText), Box::new(OutputFragments)])
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
