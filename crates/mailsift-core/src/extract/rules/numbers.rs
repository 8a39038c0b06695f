//! Numeric coercion with `parseFloat` semantics.

/// Parse a number out of free text.
///
/// Strips every character except ASCII digits, `.` and `-`, then parses the
/// longest valid leading float. Currency symbols, thousands separators and
/// surrounding words all disappear in the strip, so `"$1,234.56"` parses as
/// `1234.56`. Deliberately literal: stray dashes survive the strip and can
/// shift the result (`"x-2-3"` parses as `-2.0`). Returns `None` when
/// nothing numeric survives.
pub fn parse_number_from_text(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    parse_float_prefix(&cleaned)
}

/// Longest valid leading float: optional sign, integer digits, optional
/// fractional part. At least one digit is required somewhere.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&b'-') | Some(&b'+')) {
        end += 1;
    }

    let mut saw_digit = false;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        saw_digit = true;
    }

    if bytes.get(end) == Some(&b'.') {
        let mut frac = end + 1;
        let mut frac_digit = false;
        while bytes.get(frac).is_some_and(|b| b.is_ascii_digit()) {
            frac += 1;
            frac_digit = true;
        }
        if saw_digit || frac_digit {
            end = frac;
            saw_digit = true;
        }
    }

    if !saw_digit {
        return None;
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_currency_and_separators() {
        assert_eq!(parse_number_from_text("$1,234.56"), Some(1234.56));
        assert_eq!(parse_number_from_text("Total: 99.99 USD"), Some(99.99));
        assert_eq!(parse_number_from_text("1 234"), Some(1234.0));
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number_from_text("42"), Some(42.0));
        assert_eq!(parse_number_from_text("-7.5"), Some(-7.5));
        assert_eq!(parse_number_from_text(".5"), Some(0.5));
    }

    #[test]
    fn test_prefix_parse_stops_at_second_sign() {
        // The strip keeps interior dashes; only the leading float counts.
        assert_eq!(parse_number_from_text("1-2-3"), Some(1.0));
        assert_eq!(parse_number_from_text("x-2-3"), Some(-2.0));
        assert_eq!(parse_number_from_text("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_nothing_numeric() {
        assert_eq!(parse_number_from_text(""), None);
        assert_eq!(parse_number_from_text("no digits here"), None);
        assert_eq!(parse_number_from_text("-"), None);
        assert_eq!(parse_number_from_text("."), None);
    }

    #[test]
    fn test_trailing_dot_accepted() {
        assert_eq!(parse_number_from_text("5."), Some(5.0));
    }
}
