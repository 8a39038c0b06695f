//! Output value types produced by the extraction engines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A monetary amount paired with its detected currency marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// Numeric amount.
    pub amount: f64,

    /// Currency symbol or code, uppercased (`$`, `€`, `£`, `USD`, `EUR`, `GBP`).
    pub currency: String,
}

/// A single extracted field value.
///
/// Serialized untagged so the output keeps the plain JSON shapes stored
/// templates were written against: `null`, booleans, numbers,
/// `{amount, currency}` objects, string arrays and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Extraction ran but produced no coercible value.
    Null,

    /// Boolean condition result.
    Boolean(bool),

    /// Plain numbers and epoch-millisecond dates.
    Number(f64),

    /// Currency amount with its marker.
    Currency(CurrencyAmount),

    /// Extracted list items.
    List(Vec<String>),

    /// Raw extracted text (empty string when nothing matched).
    Text(String),
}

impl FieldValue {
    /// True when the value carries no extracted content.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

/// Mapping from field name to extracted value.
///
/// Every template field with extraction rules contributes exactly one key;
/// fields without rules contribute none. Ordered map so serialized output
/// is identical across runs.
pub type ParsedData = BTreeMap<String, FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_json_shapes() {
        assert_eq!(serde_json::to_string(&FieldValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&FieldValue::Boolean(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&FieldValue::Number(42.5)).unwrap(), "42.5");
        assert_eq!(
            serde_json::to_string(&FieldValue::List(vec!["a".to_string(), "b".to_string()]))
                .unwrap(),
            r#"["a","b"]"#
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::Currency(CurrencyAmount {
                amount: 99.99,
                currency: "USD".to_string(),
            }))
            .unwrap(),
            r#"{"amount":99.99,"currency":"USD"}"#
        );
    }

    #[test]
    fn test_field_value_is_empty() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(FieldValue::List(Vec::new()).is_empty());
        assert!(!FieldValue::Boolean(false).is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::Text("x".to_string()).is_empty());
    }
}
