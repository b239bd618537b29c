//! Error Types
//!
//! Failures surfaced while loading the vector table or resolving words.
//! Everything past startup is infallible apart from the missing fallback case.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the vector table or the stopword list
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed row at {path}:{line}: {reason}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Dimension mismatch at {path}:{line}: expected {expected}, got {actual}")]
    DimensionMismatch {
        path: PathBuf,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("No vectors found in '{path}'")]
    EmptySource { path: PathBuf },
}

/// Errors raised by catalog construction and lookup
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The substitute vector for unknown words is not in the vocabulary.
    #[error("Fallback word '{word}' is not in the vocabulary")]
    MissingFallback { word: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Error returned when parsing a vector from its comma-separated text form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseVectorError {
    #[error("vector text is empty")]
    Empty,

    #[error("invalid component {position} '{token}': {source}")]
    InvalidComponent {
        position: usize,
        token: String,
        source: ParseFloatError,
    },
}
