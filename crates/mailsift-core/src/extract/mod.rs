//! Email field extraction module.

mod generic;
mod template;
pub mod rules;

pub use generic::{extract_generic, GenericExtraction, GenericExtractor};
pub use template::{extract_with_template, ExtractionReport, TemplateExtractor};
