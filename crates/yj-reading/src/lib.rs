//! Hexagram catalog and reading-context assembly.
//!
//! Looks up the interpretive record for each hexagram of a cast through a
//! bounded, thread-safe [`HexagramCatalog`] and bundles the before/after
//! records with the line texts of the changing lines into a
//! [`ReadingContext`] for the text-generation layer.

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod record;
pub mod source;
pub mod validate;

pub use catalog::HexagramCatalog;
pub use config::ReadingConfig;
pub use context::{ReadingBuilder, ReadingContext, ReadingSummary, select_lines};
pub use error::{ReadingError, ReadingResult};
pub use record::{
    HexagramInfo, HexagramRecord, Image, Judgment, LineText, Meaning, RecordError, TrigramInfo,
    Trigrams,
};
pub use source::{DirectorySource, MemorySource, RecordSource, SourceError};
pub use validate::{IssueKind, ValidationIssue, validate_catalog};
