//! Positional and regex text extraction.

use regex::{Regex, RegexBuilder};

use crate::error::RuleError;
use crate::models::template::ExtractionRule;

/// Compile a user-supplied pattern carrying JS-style flags.
///
/// `i`, `m` and `s` translate to an inline flag group. `g`, `u` and `y`
/// only change how a pattern is driven, so they are accepted and ignored;
/// the call site decides between first-match and global iteration. Any
/// other flag is rejected. `size_limit` bounds the compiled program so an
/// oversized pattern fails fast instead of eating memory.
pub fn compile_rule_pattern(
    pattern: &str,
    flags: Option<&str>,
    size_limit: usize,
) -> Result<Regex, RuleError> {
    let flags = flags.unwrap_or("");
    let mut inline = String::new();

    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' => {
                if !inline.contains(flag) {
                    inline.push(flag);
                }
            }
            'g' | 'u' | 'y' => {}
            other => {
                return Err(RuleError::UnsupportedFlag {
                    flag: other,
                    flags: flags.to_string(),
                });
            }
        }
    }

    let source = if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{inline}){pattern}")
    };

    RegexBuilder::new(&source)
        .size_limit(size_limit)
        .build()
        .map_err(|e| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })
}

/// Extract raw text from `content` according to an extraction rule.
///
/// A regex rule wins over positional anchors. Among anchors,
/// `before`+`after` selects the text between the two, `after` alone the
/// text following it, `before` alone the text preceding it; `max_length`
/// bounds the open side. Anchors bind to the first occurrence only.
/// No match yields an empty string, never an error.
pub fn extract_text_by_rules(
    content: &str,
    rules: &ExtractionRule,
    size_limit: usize,
) -> Result<String, RuleError> {
    if let Some(pattern) = &rules.regex {
        let re = compile_rule_pattern(pattern, rules.flags.as_deref(), size_limit)?;
        // A missing or non-participating capture group degrades to "".
        let extracted = re
            .captures(content)
            .map(|caps| {
                caps.get(rules.group.unwrap_or(0))
                    .map_or("", |m| m.as_str())
                    .to_string()
            })
            .unwrap_or_default();
        return Ok(extracted);
    }

    match (&rules.before, &rules.after) {
        (Some(before), Some(after)) => {
            let Some(before_idx) = content.find(before.as_str()) else {
                return Ok(String::new());
            };
            let start = before_idx + before.len();
            let Some(after_rel) = content[start..].find(after.as_str()) else {
                return Ok(String::new());
            };
            Ok(content[start..start + after_rel].trim().to_string())
        }
        (None, Some(after)) => {
            let Some(after_idx) = content.find(after.as_str()) else {
                return Ok(String::new());
            };
            let start = after_idx + after.len();
            let end = match rules.max_length {
                Some(max) => floor_char_boundary(content, start.saturating_add(max)),
                None => content.len(),
            };
            Ok(content[start..end].trim().to_string())
        }
        (Some(before), None) => {
            let Some(before_idx) = content.find(before.as_str()) else {
                return Ok(String::new());
            };
            let start = match rules.max_length {
                Some(max) => floor_char_boundary(content, before_idx.saturating_sub(max)),
                None => 0,
            };
            Ok(content[start..before_idx].trim().to_string())
        }
        (None, None) => Ok(String::new()),
    }
}

/// Largest char boundary not exceeding `idx`.
fn floor_char_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
