//! Boolean condition checks.

use crate::error::RuleError;
use crate::models::template::ExtractionRule;

use super::text::compile_rule_pattern;

/// Check a boolean condition against `content`.
///
/// A present `contains` decides alone: when the literal substring is
/// absent the result is `false` even if a `regex` is also configured.
/// Only a rule without `contains` falls through to the regex test; a rule
/// with neither is `false`.
pub fn check_boolean_condition(
    content: &str,
    rules: &ExtractionRule,
    size_limit: usize,
) -> Result<bool, RuleError> {
    if let Some(needle) = &rules.contains {
        return Ok(content.contains(needle.as_str()));
    }

    if let Some(pattern) = &rules.regex {
        let re = compile_rule_pattern(pattern, rules.flags.as_deref(), size_limit)?;
        return Ok(re.is_match(content));
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rules = ExtractionRule {
            contains: Some("Paid".to_string()),
            ..Default::default()
        };

        assert!(check_boolean_condition("Invoice Paid in full", &rules, 1 << 20).unwrap());
        assert!(!check_boolean_condition("Invoice due", &rules, 1 << 20).unwrap());
    }

    #[test]
    fn test_failing_contains_never_falls_through_to_regex() {
        let rules = ExtractionRule {
            contains: Some("Paid".to_string()),
            regex: Some("Due".to_string()),
            ..Default::default()
        };

        // "Due" matches, but the present `contains` short-circuits.
        assert!(!check_boolean_condition("Payment Due tomorrow", &rules, 1 << 20).unwrap());
    }

    #[test]
    fn test_regex_when_contains_absent() {
        let rules = ExtractionRule {
            regex: Some(r"(?i)urgent".to_string()),
            ..Default::default()
        };

        assert!(check_boolean_condition("URGENT reply needed", &rules, 1 << 20).unwrap());
        assert!(!check_boolean_condition("no rush", &rules, 1 << 20).unwrap());
    }

    #[test]
    fn test_no_mechanism_is_false() {
        assert!(!check_boolean_condition("anything", &ExtractionRule::default(), 1 << 20).unwrap());
    }

    #[test]
    fn test_invalid_regex_errors() {
        let rules = ExtractionRule {
            regex: Some("(bad".to_string()),
            ..Default::default()
        };

        assert!(check_boolean_condition("text", &rules, 1 << 20).is_err());
    }
}
