//! List extraction from prefixed lines and repeated regex captures.

use tracing::warn;

use crate::models::template::ExtractionRule;

use super::text::compile_rule_pattern;

/// Extract list items from `content`.
///
/// A line-prefix rule yields one item per matching line: lines trimmed,
/// the prefix stripped, items trimmed again, empties dropped. A regex rule
/// with a capture group yields one item per global match (group 0 pushes
/// whole matches; out-of-range groups are skipped). Both run when both are
/// configured, prefix items first. A pattern that fails to compile is
/// logged and the items gathered so far are returned.
pub fn extract_list_items(
    content: &str,
    rules: &ExtractionRule,
    size_limit: usize,
) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(prefix) = &rules.item_prefix {
        for line in content.split('\n') {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix(prefix.as_str()) {
                let item = rest.trim();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
            }
        }
    }

    if let (Some(pattern), Some(group)) = (&rules.regex, rules.group) {
        match compile_rule_pattern(pattern, rules.flags.as_deref(), size_limit) {
            Ok(re) => {
                for caps in re.captures_iter(content) {
                    if group >= caps.len() {
                        continue;
                    }
                    let item = caps.get(group).map_or("", |m| m.as_str()).trim();
                    if !item.is_empty() {
                        items.push(item.to_string());
                    }
                }
            }
            Err(err) => {
                warn!("list rule pattern failed to compile: {}", err);
            }
        }
    }

    items
}
