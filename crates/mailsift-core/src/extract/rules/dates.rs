//! Date parsing into epoch milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::patterns::{DATE_MONTH_LOOSE, DATE_US_DASH_LOOSE, DATE_US_SLASH_LOOSE};

/// Parse a date out of free text, returning epoch milliseconds.
///
/// Well-formed instants are tried first (RFC 3339, RFC 2822, a bare
/// `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`), then `MM/DD/YYYY`, `MM-DD-YYYY`
/// and `Month DD, YYYY` anywhere in the text. Date-only formats resolve to
/// UTC midnight. A format that matches but names an impossible calendar
/// date falls through to the next one.
pub fn parse_date_from_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(ms) = parse_instant(text) {
        return Some(ms);
    }

    if let Some(caps) = DATE_US_SLASH_LOOSE.captures(text) {
        if let Some(ms) = mdy_to_epoch_ms(&caps[1], &caps[2], &caps[3]) {
            return Some(ms);
        }
    }

    if let Some(caps) = DATE_US_DASH_LOOSE.captures(text) {
        if let Some(ms) = mdy_to_epoch_ms(&caps[1], &caps[2], &caps[3]) {
            return Some(ms);
        }
    }

    if let Some(caps) = DATE_MONTH_LOOSE.captures(text) {
        if let (Some(month), Ok(day), Ok(year)) = (
            month_from_prefix(&caps[1]),
            caps[2].parse::<u32>(),
            caps[3].parse::<i32>(),
        ) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date_to_epoch_ms(date));
            }
        }
    }

    None
}

/// Parse fully-specified instants and ISO dates.
fn parse_instant(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date_to_epoch_ms(date));
    }
    None
}

fn mdy_to_epoch_ms(month: &str, day: &str, year: &str) -> Option<i64> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date_to_epoch_ms(date))
}

/// Epoch milliseconds of UTC midnight for `date`.
fn date_to_epoch_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Map a month name prefix ("Jan", "January", "SEPT") to its number.
fn month_from_prefix(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    match lowered.get(..3)? {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch_ms(year: i32, month: u32, day: u32) -> i64 {
        date_to_epoch_ms(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date_from_text("2024-03-15"), Some(epoch_ms(2024, 3, 15)));
    }

    #[test]
    fn test_parse_rfc3339_instant() {
        let ms = parse_date_from_text("2024-03-15T10:30:00Z").unwrap();
        assert_eq!(ms, epoch_ms(2024, 3, 15) + (10 * 3600 + 30 * 60) * 1000);
    }

    #[test]
    fn test_all_us_formats_agree() {
        let expected = epoch_ms(2024, 3, 15);
        assert_eq!(parse_date_from_text("03/15/2024"), Some(expected));
        assert_eq!(parse_date_from_text("03-15-2024"), Some(expected));
        assert_eq!(parse_date_from_text("Mar 15, 2024"), Some(expected));
        assert_eq!(parse_date_from_text("March 15 2024"), Some(expected));
    }

    #[test]
    fn test_month_name_case_insensitive() {
        assert_eq!(
            parse_date_from_text("SEPTEMBER 5, 2023"),
            Some(epoch_ms(2023, 9, 5))
        );
    }

    #[test]
    fn test_date_inside_surrounding_text() {
        assert_eq!(
            parse_date_from_text("due by 12/31/2024 at the latest"),
            Some(epoch_ms(2024, 12, 31))
        );
    }

    #[test]
    fn test_impossible_date_rejected() {
        assert_eq!(parse_date_from_text("13/45/2024"), None);
        assert_eq!(parse_date_from_text("02/30/2024"), None);
    }

    #[test]
    fn test_unparseable_text() {
        assert_eq!(parse_date_from_text(""), None);
        assert_eq!(parse_date_from_text("next Tuesday"), None);
    }
}
