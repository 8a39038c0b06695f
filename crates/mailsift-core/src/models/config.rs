//! Configuration structures for the extraction engine.

use serde::{Deserialize, Serialize};

/// Currency assumed when no marker is found in the text.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default compiled-size budget for user-supplied regexes, in bytes.
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Main configuration for the mailsift engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Extraction behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency assumed when an amount carries no symbol or code.
    pub default_currency: String,

    /// Compiled-size budget for user-supplied regexes, in bytes.
    /// Oversized patterns fail compilation instead of consuming memory.
    pub pattern_size_limit: usize,

    /// Remove duplicate phone numbers matched by overlapping patterns.
    pub dedupe_phone_numbers: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
            dedupe_phone_numbers: false,
        }
    }
}

impl SiftConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiftConfig::default();
        assert_eq!(config.extraction.default_currency, "USD");
        assert_eq!(config.extraction.pattern_size_limit, DEFAULT_PATTERN_SIZE_LIMIT);
        assert!(!config.extraction.dedupe_phone_numbers);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SiftConfig =
            serde_json::from_str(r#"{"extraction": {"default_currency": "EUR"}}"#).unwrap();
        assert_eq!(config.extraction.default_currency, "EUR");
        assert_eq!(config.extraction.pattern_size_limit, DEFAULT_PATTERN_SIZE_LIMIT);
    }
}
