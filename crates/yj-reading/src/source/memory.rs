//! In-memory records.

use std::collections::HashMap;

use yj_core::CatalogNumber;

use super::{RecordSource, SourceError};
use crate::record::HexagramRecord;

/// A fixed set of records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: HashMap<CatalogNumber, HexagramRecord>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the record for `number`.
    pub fn with_record(mut self, number: CatalogNumber, record: HexagramRecord) -> Self {
        self.insert(number, record);
        self
    }

    /// Add or replace the record for `number`.
    pub fn insert(&mut self, number: CatalogNumber, record: HexagramRecord) {
        self.records.insert(number, record);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self, number: CatalogNumber) -> Result<HexagramRecord, SourceError> {
        self.records
            .get(&number)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("no in-memory record {number}")))
    }
}
