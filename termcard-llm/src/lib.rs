//! # termcard-llm — structured-output client for term cards
//!
//! Turns one term into one upstream call and one [`TermCard`]:
//!
//! ```text
//! term ──▶ prompt::build_request ──▶ POST {base_url}/v1/responses
//!                                         │
//!      TermCard ◀── Extractor::card ◀─────┘
//!                   (aggregated text → output fragments → output_parsed)
//! ```
//!
//! The upstream contract is the responses API with the schema nested under
//! `text.format`.
//!
//! [`TermCard`]: termcard_core::TermCard

pub mod client;
pub mod extract;
pub mod prompt;
pub mod types;

pub use client::TermCardGenerator;
pub use extract::{AggregatedText, Extractor, OutputFragments, TextStrategy};
pub use types::ResponsesRequest;
