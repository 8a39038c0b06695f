//! Generic heuristic extraction for emails without a template.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::config::{ExtractionConfig, DEFAULT_CURRENCY};
use crate::models::value::CurrencyAmount;

use super::rules::patterns::*;
use super::rules::{parse_currency_from_text, parse_date_from_text};

/// Everything the generic pass knows how to find, one key per detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericExtraction {
    /// `Key: Value` / `Key = Value` lines; later duplicates overwrite.
    pub key_value_pairs: BTreeMap<String, String>,

    /// Epoch milliseconds for every recognized date, duplicates kept.
    pub dates: Vec<i64>,

    /// Currency amounts in order of detection.
    pub amounts: Vec<CurrencyAmount>,

    /// URLs in order of appearance.
    pub urls: Vec<String>,

    /// Capitalized words that look like names. Coarse by construction.
    pub names: Vec<String>,

    /// Email addresses in order of appearance.
    pub email_addresses: Vec<String>,

    /// Phone numbers; overlapping patterns can repeat a number.
    pub phone_numbers: Vec<String>,
}

/// Template-less extractor running a fixed battery of detectors.
///
/// Detectors are independent: each one writes its own output key and none
/// can disturb a sibling's result.
pub struct GenericExtractor {
    /// Currency assumed when an amount carries no marker.
    default_currency: String,
    /// Drop repeated phone numbers, keeping first-seen order.
    dedupe_phone_numbers: bool,
}

impl GenericExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            dedupe_phone_numbers: false,
        }
    }

    /// Create an extractor from a configuration section.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            default_currency: config.default_currency.clone(),
            dedupe_phone_numbers: config.dedupe_phone_numbers,
        }
    }

    /// Set the currency assumed when none is detected.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Set whether repeated phone numbers are dropped.
    pub fn with_dedupe_phone_numbers(mut self, dedupe: bool) -> Self {
        self.dedupe_phone_numbers = dedupe;
        self
    }

    /// Run all detectors over an email body.
    pub fn extract(&self, email_body: &str) -> GenericExtraction {
        let result = GenericExtraction {
            key_value_pairs: extract_key_value_pairs(email_body),
            dates: extract_dates(email_body),
            amounts: self.extract_currency_amounts(email_body),
            urls: extract_urls(email_body),
            names: extract_proper_nouns(email_body),
            email_addresses: extract_email_addresses(email_body),
            phone_numbers: self.extract_phone_numbers(email_body),
        };

        debug!(
            "generic pass found {} key-value pairs, {} dates, {} amounts",
            result.key_value_pairs.len(),
            result.dates.len(),
            result.amounts.len()
        );

        result
    }

    fn extract_currency_amounts(&self, content: &str) -> Vec<CurrencyAmount> {
        let mut amounts = Vec::new();

        for pattern in [&*AMOUNT_DOLLAR, &*AMOUNT_CODE_SUFFIX, &*AMOUNT_CODE_PREFIX] {
            for hit in pattern.find_iter(content) {
                if let Some(parsed) = parse_currency_from_text(hit.as_str(), &self.default_currency)
                {
                    amounts.push(parsed);
                }
            }
        }

        amounts
    }

    fn extract_phone_numbers(&self, content: &str) -> Vec<String> {
        let mut phones = Vec::new();

        for pattern in [&*PHONE_PAREN, &*PHONE_DASHED, &*PHONE_INTL] {
            for hit in pattern.find_iter(content) {
                phones.push(hit.as_str().to_string());
            }
        }

        if self.dedupe_phone_numbers {
            let mut seen = HashSet::new();
            phones.retain(|phone| seen.insert(phone.clone()));
        }

        phones
    }
}

impl Default for GenericExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the generic battery with default settings.
pub fn extract_generic(email_body: &str) -> GenericExtraction {
    GenericExtractor::new().extract(email_body)
}

fn extract_key_value_pairs(content: &str) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();

    for line in content.split('\n') {
        // A colon line never falls back to the equals pattern, even when
        // its key or value trims away to nothing.
        if let Some(caps) = KV_COLON.captures(line) {
            insert_pair(&mut pairs, &caps[1], &caps[2]);
            continue;
        }
        if let Some(caps) = KV_EQUALS.captures(line) {
            insert_pair(&mut pairs, &caps[1], &caps[2]);
        }
    }

    pairs
}

fn insert_pair(pairs: &mut BTreeMap<String, String>, key: &str, value: &str) {
    let key = key.trim();
    let value = value.trim();
    if !key.is_empty() && !value.is_empty() {
        pairs.insert(key.to_string(), value.to_string());
    }
}

fn extract_dates(content: &str) -> Vec<i64> {
    let mut dates = Vec::new();

    for pattern in [&*DATE_ISO, &*DATE_US_SLASH, &*DATE_US_DASH, &*DATE_MONTH] {
        for hit in pattern.find_iter(content) {
            if let Some(ms) = parse_date_from_text(hit.as_str()) {
                dates.push(ms);
            }
        }
    }

    dates
}

fn extract_urls(content: &str) -> Vec<String> {
    URL.find_iter(content)
        .map(|hit| hit.as_str().to_string())
        .collect()
}

fn extract_proper_nouns(content: &str) -> Vec<String> {
    let mut names = Vec::new();

    for line in content.split('\n') {
        // The first word of a line is capitalized for sentence reasons,
        // not name reasons; skip it.
        for word in line.split(' ').skip(1) {
            let word = word.trim();
            if PROPER_NOUN.is_match(word) {
                names.push(word.to_string());
            }
        }
    }

    names
}

fn extract_email_addresses(content: &str) -> Vec<String> {
    EMAIL
        .find_iter(content)
        .map(|hit| hit.as_str().to_string())
        .collect()
}
