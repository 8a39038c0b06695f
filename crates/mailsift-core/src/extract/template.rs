//! Template-driven field extraction.

use std::time::Instant;

use tracing::{debug, warn};

use crate::error::RuleError;
use crate::models::config::{ExtractionConfig, DEFAULT_CURRENCY, DEFAULT_PATTERN_SIZE_LIMIT};
use crate::models::template::{ExtractionRule, FieldType, Template, TemplateField};
use crate::models::value::{FieldValue, ParsedData};

use super::rules::{
    check_boolean_condition, extract_list_items, extract_text_by_rules, parse_currency_from_text,
    parse_date_from_text, parse_number_from_text,
};

/// Result of running a template over an email body.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted field values.
    pub data: ParsedData,
    /// Extraction warnings: required fields that produced nothing, fields
    /// skipped for having no rules, the aborting rule error if one occurred.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Template-driven extractor.
pub struct TemplateExtractor {
    /// Currency assumed when an amount carries no marker.
    default_currency: String,
    /// Compiled-size budget for user-supplied regexes.
    pattern_size_limit: usize,
}

impl TemplateExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }

    /// Create an extractor from a configuration section.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            default_currency: config.default_currency.clone(),
            pattern_size_limit: config.pattern_size_limit,
        }
    }

    /// Set the currency assumed when none is detected.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Set the compiled-size budget for user-supplied regexes.
    pub fn with_pattern_size_limit(mut self, limit: usize) -> Self {
        self.pattern_size_limit = limit;
        self
    }

    /// Apply a template to an email body.
    ///
    /// Every field with extraction rules contributes exactly one key to the
    /// output; fields without rules contribute none. A rule whose pattern
    /// fails to compile stops the pass and the fields extracted up to that
    /// point are returned as-is.
    pub fn extract(&self, email_body: &str, template: &Template) -> ParsedData {
        self.run(email_body, template).0
    }

    /// Apply a template and report warnings alongside the data.
    pub fn parse(&self, email_body: &str, template: &Template) -> ExtractionReport {
        let start = Instant::now();
        let (data, warnings) = self.run(email_body, template);

        ExtractionReport {
            data,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn run(&self, email_body: &str, template: &Template) -> (ParsedData, Vec<String>) {
        let mut result = ParsedData::new();
        let mut warnings = Vec::new();

        debug!(
            "applying template with {} fields to {} characters",
            template.fields.len(),
            email_body.len()
        );

        for field in &template.fields {
            let Some(rules) = &field.extraction_rules else {
                warnings.push(format!("field '{}' has no extraction rules, skipped", field.name));
                continue;
            };

            match self.extract_field(email_body, field, rules) {
                Ok(value) => {
                    if field.required && value.is_empty() {
                        warnings.push(format!("required field '{}' produced no value", field.name));
                    }
                    result.insert(field.name.clone(), value);
                }
                Err(err) => {
                    // The first bad rule ends the pass; the partial result
                    // stands and the report says why it is partial.
                    warn!(
                        "rule for field '{}' failed: {}; keeping partial result",
                        field.name, err
                    );
                    warnings.push(format!(
                        "field '{}': {}; remaining fields skipped",
                        field.name, err
                    ));
                    break;
                }
            }
        }

        (result, warnings)
    }

    fn extract_field(
        &self,
        content: &str,
        field: &TemplateField,
        rules: &ExtractionRule,
    ) -> Result<FieldValue, RuleError> {
        let value = match field.field_type {
            FieldType::Text => {
                FieldValue::Text(extract_text_by_rules(content, rules, self.pattern_size_limit)?)
            }
            FieldType::Date => {
                let raw = extract_text_by_rules(content, rules, self.pattern_size_limit)?;
                match parse_date_from_text(&raw) {
                    Some(ms) => FieldValue::Number(ms as f64),
                    None => FieldValue::Null,
                }
            }
            FieldType::Number => {
                let raw = extract_text_by_rules(content, rules, self.pattern_size_limit)?;
                match parse_number_from_text(&raw) {
                    Some(number) => FieldValue::Number(number),
                    None => FieldValue::Null,
                }
            }
            FieldType::Currency => {
                let raw = extract_text_by_rules(content, rules, self.pattern_size_limit)?;
                match parse_currency_from_text(&raw, &self.default_currency) {
                    Some(amount) => FieldValue::Currency(amount),
                    None => FieldValue::Null,
                }
            }
            FieldType::Boolean => FieldValue::Boolean(check_boolean_condition(
                content,
                rules,
                self.pattern_size_limit,
            )?),
            FieldType::List => {
                FieldValue::List(extract_list_items(content, rules, self.pattern_size_limit))
            }
        };

        Ok(value)
    }
}

impl Default for TemplateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a template to an email body with default settings.
pub fn extract_with_template(email_body: &str, template: &Template) -> ParsedData {
    TemplateExtractor::new().extract(email_body, template)
}
