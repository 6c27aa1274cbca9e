//! Error types for catalog lookups and reading assembly.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while looking up records or building a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// A catalog number outside 1-64 was requested.
    #[error("invalid catalog number: {0} (expected 1-64)")]
    InvalidCatalogNumber(u32),

    /// The record source has no record for this number.
    #[error("hexagram {number} not found: {detail}")]
    RecordNotFound {
        /// The requested catalog number.
        number: u8,
        /// Where the source looked.
        detail: String,
    },

    /// The record source returned a record that could not be parsed or
    /// failed validation.
    #[error("hexagram {number} is malformed: {reason}")]
    RecordMalformed {
        /// The requested catalog number.
        number: u8,
        /// What was wrong with the record.
        reason: String,
    },

    /// A changing line has no matching line text in the record.
    #[error("hexagram {number} has no text for line {position}")]
    LineIndexOutOfRange {
        /// The catalog number of the record that was searched.
        number: u8,
        /// The 1-based line position that was missing.
        position: u8,
    },
}
