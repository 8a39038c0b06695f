//! Fixed regex patterns shared by the coercion primitives and the generic
//! detectors.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency symbol or ISO code, anywhere in the text
    pub static ref CURRENCY_MARKER: Regex = Regex::new(
        r"(?i)(\$|€|£|USD|EUR|GBP)"
    ).unwrap();

    // Loose date patterns used when coercing already-extracted text
    pub static ref DATE_US_SLASH_LOOSE: Regex = Regex::new(
        r"(\d{1,2})/(\d{1,2})/(\d{4})"
    ).unwrap();

    pub static ref DATE_US_DASH_LOOSE: Regex = Regex::new(
        r"(\d{1,2})-(\d{1,2})-(\d{4})"
    ).unwrap();

    pub static ref DATE_MONTH_LOOSE: Regex = Regex::new(
        r"(?i)(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* (\d{1,2}),? (\d{4})"
    ).unwrap();

    // Word-bounded date patterns for scanning whole email bodies
    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})-(\d{2})-(\d{2})\b"
    ).unwrap();

    pub static ref DATE_US_SLASH: Regex = Regex::new(
        r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b"
    ).unwrap();

    pub static ref DATE_US_DASH: Regex = Regex::new(
        r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b"
    ).unwrap();

    pub static ref DATE_MONTH: Regex = Regex::new(
        r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* (\d{1,2}),? (\d{4})\b"
    ).unwrap();

    // Key-value line patterns ("Key: Value" tried before "Key = Value")
    pub static ref KV_COLON: Regex = Regex::new(
        r"^([^:]+):\s*(.+)$"
    ).unwrap();

    pub static ref KV_EQUALS: Regex = Regex::new(
        r"^([^=]+)=\s*(.+)$"
    ).unwrap();

    // Amount patterns ($1,234.56 / 1,234.56 USD / EUR 1,234.56)
    pub static ref AMOUNT_DOLLAR: Regex = Regex::new(
        r"\$\s?(\d{1,3}(,\d{3})*(\.\d{1,2})?)"
    ).unwrap();

    pub static ref AMOUNT_CODE_SUFFIX: Regex = Regex::new(
        r"(\d{1,3}(,\d{3})*(\.\d{1,2})?)\s?(USD|EUR|GBP)"
    ).unwrap();

    pub static ref AMOUNT_CODE_PREFIX: Regex = Regex::new(
        r"(EUR|GBP)\s?(\d{1,3}(,\d{3})*(\.\d{1,2})?)"
    ).unwrap();

    // URL pattern
    pub static ref URL: Regex = Regex::new(
        r"https?://[^\s]+"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone patterns ((555) 123-4567 / 555-123-4567 / +1 555 123 4567)
    pub static ref PHONE_PAREN: Regex = Regex::new(
        r"\(\d{3}\)\s*\d{3}[-.\s]\d{4}"
    ).unwrap();

    pub static ref PHONE_DASHED: Regex = Regex::new(
        r"\b\d{3}[-.\s]\d{3}[-.\s]\d{4}\b"
    ).unwrap();

    pub static ref PHONE_INTL: Regex = Regex::new(
        r"\+\d{1,2}\s*\d{3}\s*\d{3}\s*\d{4}"
    ).unwrap();

    // Single capitalized word, no digits or punctuation
    pub static ref PROPER_NOUN: Regex = Regex::new(
        r"^[A-Z][a-z]+$"
    ).unwrap();
}
