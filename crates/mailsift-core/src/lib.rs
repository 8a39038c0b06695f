//! Core library for rule-based email field extraction.
//!
//! This crate provides:
//! - Template-driven extraction: named fields with declarative rules
//!   (regex, positional anchors, literal substrings, line prefixes)
//! - Generic heuristic extraction for emails without a template
//!   (key-value pairs, dates, amounts, URLs, names, emails, phones)
//! - Typed coercion of raw matches into dates, numbers, currency
//!   amounts, booleans and lists
//!
//! Both entry points are pure functions of the email text and the rules:
//! no I/O, no shared state, no external services.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{Result, RuleError, SiftError};
pub use extract::{
    extract_generic, extract_with_template, ExtractionReport, GenericExtraction,
    GenericExtractor, TemplateExtractor,
};
pub use models::config::{ExtractionConfig, SiftConfig};
pub use models::template::{ExtractionRule, FieldType, Template, TemplateField};
pub use models::value::{CurrencyAmount, FieldValue, ParsedData};
