//! Error types for the casting engine.

/// Errors that can occur while constructing lines, figures, or hexagrams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A line value outside {6, 7, 8, 9}.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLineValue(u8),

    /// A figure or hexagram was built from the wrong number of lines.
    #[error("expected 6 lines, got {0}")]
    InvalidLineCount(usize),

    /// A hexagram digit outside {0, 1}.
    #[error("invalid hexagram digit {digit} at position {position}")]
    InvalidDigit {
        /// 0-based position of the offending digit.
        position: usize,
        /// The digit that was supplied.
        digit: u8,
    },

    /// A catalog number outside 1-64.
    #[error("invalid catalog number: {0} (expected 1-64)")]
    InvalidCatalogNumber(u32),
}

/// Convenience result type for casting operations.
pub type CoreResult<T> = Result<T, CoreError>;
