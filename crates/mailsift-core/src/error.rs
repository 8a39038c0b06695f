//! Error types for the mailsift-core library.

use thiserror::Error;

/// Main error type for the mailsift library.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Extraction rule error.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while compiling a user-supplied extraction rule.
///
/// These never escape the extraction entry points; a bad rule degrades to
/// partial output and a logged warning.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The rule's pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// The rule carries a regex flag with no equivalent here.
    #[error("unsupported regex flag `{flag}` in `{flags}`")]
    UnsupportedFlag { flag: char, flags: String },
}

/// Result type for the mailsift library.
pub type Result<T> = std::result::Result<T, SiftError>;
