//! # Term Card Core
//!
//! Shared building blocks for the term card service:
//!
//! - [`TermCard`] — the four-field English/Arabic result
//!   (`english`, `pronunciation_ar`, `arabic`, `description_ar`)
//! - [`TermRequest`] — a validated, trimmed inbound term
//! - [`TermCardError`] — the error taxonomy, each variant carrying its HTTP status
//! - [`TermCardConfig`] — TOML + environment configuration, loaded once at start
//!
//! This crate performs no network I/O.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{LoggingConfig, TermCardConfig, UpstreamConfig};
pub use error::TermCardError;
pub use types::{TermCard, TermRequest};
