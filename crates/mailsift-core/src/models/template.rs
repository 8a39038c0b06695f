//! Template and extraction-rule models.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::extract::rules::compile_rule_pattern;
use crate::models::config::DEFAULT_PATTERN_SIZE_LIMIT;

/// Output type a template field coerces its match into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Raw extracted text.
    Text,
    /// Epoch-millisecond date.
    Date,
    /// Floating-point number.
    Number,
    /// Amount plus currency marker.
    Currency,
    /// Presence test.
    Boolean,
    /// List of strings.
    List,
}

/// A declarative recipe for locating a value inside raw text.
///
/// One record covers every rule shape; which members are set decides the
/// mechanism. Regex wins over anchors for text-like fields; among anchors
/// `before`+`after` beats `after` beats `before`. Boolean fields check
/// `contains` before `regex`. List fields run `item_prefix` then
/// `regex`+`group` and concatenate the results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionRule {
    /// Pattern for regex extraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// JS-style regex flags (`i`, `m`, `s`; `g`/`u`/`y` accepted and ignored).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,

    /// Capture group to return; 0 or absent means the whole match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,

    /// Literal anchor preceding the wanted text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    /// Literal anchor following the wanted text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// Bound on the open side of a single-anchor extraction, in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Literal substring whose presence decides a boolean field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,

    /// Per-line prefix marking list items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_prefix: Option<String>,
}

/// A named field in a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    /// Unique key in the extraction output.
    pub name: String,

    /// Declared output type.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether a missing value is worth a warning.
    #[serde(default)]
    pub required: bool,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How to locate the value. A field without rules is skipped entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_rules: Option<ExtractionRule>,
}

/// An ordered list of named fields defining how to turn email text into
/// structured data. Field order is evaluation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Template name.
    #[serde(default)]
    pub name: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fields in evaluation order.
    pub fields: Vec<TemplateField>,
}

impl Template {
    /// Check a template for authoring mistakes.
    ///
    /// The extractors tolerate everything reported here; `lint` exists so
    /// template authors hear about problems before they see odd output.
    pub fn lint(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                issues.push(format!("duplicate field name '{}'", field.name));
            }

            let Some(rules) = &field.extraction_rules else {
                issues.push(format!(
                    "field '{}' has no extraction rules and will be skipped",
                    field.name
                ));
                continue;
            };

            if let Some(pattern) = &rules.regex {
                if let Err(err) =
                    compile_rule_pattern(pattern, rules.flags.as_deref(), DEFAULT_PATTERN_SIZE_LIMIT)
                {
                    issues.push(format!("field '{}': {}", field.name, err));
                }
            }

            match field.field_type {
                FieldType::Boolean => {
                    if rules.contains.is_none() && rules.regex.is_none() {
                        issues.push(format!(
                            "boolean field '{}' has neither `contains` nor `regex` and is always false",
                            field.name
                        ));
                    }
                }
                FieldType::List => {
                    if rules.item_prefix.is_none()
                        && !(rules.regex.is_some() && rules.group.is_some())
                    {
                        issues.push(format!(
                            "list field '{}' needs `itemPrefix` or `regex` with `group` and is always empty",
                            field.name
                        ));
                    }
                }
                _ => {
                    if rules.regex.is_none() && rules.before.is_none() && rules.after.is_none() {
                        issues.push(format!(
                            "field '{}' selects no mechanism (`regex`, `before` or `after`) and is always empty",
                            field.name
                        ));
                    }
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, field_type: FieldType, rules: Option<ExtractionRule>) -> TemplateField {
        TemplateField {
            name: name.to_string(),
            field_type,
            required: false,
            description: None,
            extraction_rules: rules,
        }
    }

    #[test]
    fn test_template_deserializes_camel_case() {
        let template: Template = serde_json::from_str(
            r#"{
                "name": "Invoices",
                "fields": [
                    {
                        "name": "invoice_number",
                        "type": "text",
                        "required": true,
                        "extractionRules": {"regex": "Invoice #(\\d+)", "group": 1}
                    },
                    {
                        "name": "items",
                        "type": "list",
                        "extractionRules": {"itemPrefix": "- ", "maxLength": 40}
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(template.fields.len(), 2);
        assert_eq!(template.fields[0].field_type, FieldType::Text);
        assert!(template.fields[0].required);
        assert_eq!(
            template.fields[0].extraction_rules.as_ref().unwrap().group,
            Some(1)
        );
        assert_eq!(
            template.fields[1]
                .extraction_rules
                .as_ref()
                .unwrap()
                .item_prefix
                .as_deref(),
            Some("- ")
        );
        assert_eq!(
            template.fields[1].extraction_rules.as_ref().unwrap().max_length,
            Some(40)
        );
    }

    #[test]
    fn test_unknown_field_type_rejected() {
        let result: Result<TemplateField, _> =
            serde_json::from_str(r#"{"name": "x", "type": "uuid"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_lint_flags_duplicates_and_missing_rules() {
        let template = Template {
            name: "t".to_string(),
            description: None,
            fields: vec![
                field(
                    "a",
                    FieldType::Text,
                    Some(ExtractionRule {
                        regex: Some("x".to_string()),
                        ..Default::default()
                    }),
                ),
                field("a", FieldType::Number, None),
                field("b", FieldType::Boolean, Some(ExtractionRule::default())),
            ],
        };

        let issues = template.lint();
        assert_eq!(issues.len(), 3);
        assert!(issues[0].contains("duplicate field name 'a'"));
        assert!(issues[1].contains("no extraction rules"));
        assert!(issues[2].contains("always false"));
    }

    #[test]
    fn test_lint_flags_bad_pattern() {
        let template = Template {
            name: String::new(),
            description: None,
            fields: vec![field(
                "broken",
                FieldType::Text,
                Some(ExtractionRule {
                    regex: Some("[unclosed".to_string()),
                    ..Default::default()
                }),
            )],
        };

        let issues = template.lint();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("invalid pattern"));
    }
}
