//! Currency amount coercion.

use crate::models::value::CurrencyAmount;

use super::numbers::parse_number_from_text;
use super::patterns::CURRENCY_MARKER;

/// Parse a currency amount out of free text.
///
/// The marker (`$`, `€`, `£`, `USD`, `EUR`, `GBP`, any case) may sit
/// anywhere in the input and is uppercased; `default_currency` fills in
/// when none is present. Returns `None` when no numeric amount parses,
/// marker or not.
pub fn parse_currency_from_text(text: &str, default_currency: &str) -> Option<CurrencyAmount> {
    if text.is_empty() {
        return None;
    }

    let currency = CURRENCY_MARKER
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
        .unwrap_or_else(|| default_currency.to_string());

    let amount = parse_number_from_text(text)?;

    Some(CurrencyAmount { amount, currency })
}
