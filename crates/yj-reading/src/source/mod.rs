//! Record sources the catalog fetches from on a cache miss.

pub mod directory;
pub mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use thiserror::Error;

use yj_core::CatalogNumber;

use crate::record::HexagramRecord;

/// Why a source could not deliver a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No record exists for the number.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record exists but could not be read or parsed.
    #[error("malformed: {0}")]
    Malformed(String),
}

/// Something that can produce the record for a catalog number.
///
/// Implementations must be shareable across threads; the catalog may call
/// `fetch` concurrently for the same or different numbers.
pub trait RecordSource: Send + Sync {
    /// Fetch the record for `number`.
    fn fetch(&self, number: CatalogNumber) -> Result<HexagramRecord, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for std::sync::Arc<S> {
    fn fetch(&self, number: CatalogNumber) -> Result<HexagramRecord, SourceError> {
        (**self).fetch(number)
    }
}
