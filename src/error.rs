//! Error types for results extraction.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context identifying the document region or field that failed.
//!
//! ## Error Categories
//!
//! - **Format Errors**: the document structure deviates from the fixed
//!   archive shape (wrong cell count, unsplittable time string)
//! - **Parse Errors**: a text field failed numeric conversion despite the
//!   structure being correct
//! - **Not Found Errors**: an expected anchor or reference element is absent
//! - **File Errors**: an archived page could not be read
//! - **Selector Errors**: an internal CSS selector failed to compile
//!
//! Every kind is final for the week being assembled: the extractor never
//! retries and never substitutes placeholder data. The season aggregator
//! decides whether to continue with the remaining weeks.
//!
//! ## Helper Constructors
//!
//! ```rust
//! use paceline::ExtractError;
//! use std::path::PathBuf;
//!
//! let format = ExtractError::format("results row", "expected 9 cells, found 7");
//! let parse = ExtractError::parse("rank", "'1st' is not an integer");
//! let missing = ExtractError::not_found("Strava segment link");
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
//! let file = ExtractError::file(PathBuf::from("2016/week3/results.html"), io_err);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

/// Main error type for results extraction.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractError {
    #[error("Malformed {context}: {details}")]
    Format { context: String, details: String },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("{what} not found in document")]
    NotFound { what: String },

    #[error("Archive file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selector: {details}")]
    Selector { details: String },
}

impl ExtractError {
    /// Returns whether this error indicates the archive layout itself has
    /// drifted (as opposed to a single unreadable value or file).
    ///
    /// Structural errors are worth surfacing loudly: downstream rows would
    /// be silently misaligned if extraction pressed on.
    pub fn is_structural(&self) -> bool {
        match self {
            ExtractError::Format { .. } => true,
            ExtractError::NotFound { .. } => true,
            ExtractError::Selector { .. } => true,
            ExtractError::Parse { .. } => false,
            ExtractError::File { .. } => false,
        }
    }

    /// Helper constructor for format errors.
    pub fn format(context: impl Into<String>, details: impl Into<String>) -> Self {
        ExtractError::Format { context: context.into(), details: details.into() }
    }

    /// Helper constructor for parse errors.
    pub fn parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        ExtractError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for missing-element errors.
    pub fn not_found(what: impl Into<String>) -> Self {
        ExtractError::NotFound { what: what.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file(path: PathBuf, source: std::io::Error) -> Self {
        ExtractError::File { path, source }
    }

    /// Replace the context label on a `Format` or `Parse` error.
    ///
    /// The field parsers report generic contexts ("integer", "elapsed time");
    /// row extraction relabels them with the field being read ("rank",
    /// "rider id") so a failed week can be traced to one cell.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            ExtractError::Format { details, .. } => {
                ExtractError::Format { context: context.into(), details }
            }
            ExtractError::Parse { details, .. } => {
                ExtractError::Parse { context: context.into(), details }
            }
            other => other,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
