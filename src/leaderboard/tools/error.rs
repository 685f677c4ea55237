use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads, parses, or renders the country data sets.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a codes line has fewer than four quote-delimited fields.
    #[error("malformed codes entry on line {line}: '{content}'")]
    MalformedCodeLine { line: usize, content: String },

    /// Raised when a rendered pair line cannot be read back.
    #[error("malformed pair on line {line}: '{content}'")]
    MalformedPairLine { line: usize, content: String },

    /// Raised when the same key appears twice and duplicates are rejected.
    #[error("duplicate key '{key}' on line {line} (first seen on line {first_line})")]
    DuplicateKey {
        key: String,
        first_line: usize,
        line: usize,
    },

    /// Raised when a positional table join would pair lists of different sizes.
    #[error("cannot pair {codes} code entries with {countries} countries by position")]
    LengthMismatch { codes: usize, countries: usize },

    /// Raised when a keyed table join finds no country for a code entry.
    #[error("no country matches '{needle}' for code {key}")]
    UnmatchedCode { key: String, needle: String },

    /// Raised when the requested output format does not apply to the mode.
    #[error("output format {format} is not supported for mode {mode}")]
    UnsupportedFormat { mode: String, format: String },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
