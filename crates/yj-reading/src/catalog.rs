//! Cached lookup from catalog number to interpretive record.
//!
//! The cache holds at most `capacity` records (never more than 64, the
//! number of distinct keys). Only successfully fetched and validated
//! records are stored; failures are returned to the caller and the next
//! call fetches again. Two threads missing on the same number may both
//! fetch, but only the first record inserted is kept and both callers get
//! that record.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use yj_core::CatalogNumber;

use crate::error::{ReadingError, ReadingResult};
use crate::record::HexagramRecord;
use crate::source::{RecordSource, SourceError};

/// Bounded, thread-safe record cache in front of a [`RecordSource`].
pub struct HexagramCatalog {
    source: Box<dyn RecordSource>,
    cache: RwLock<HashMap<CatalogNumber, Arc<HexagramRecord>>>,
    capacity: usize,
}

impl HexagramCatalog {
    /// Largest useful capacity: one slot per hexagram.
    pub const MAX_CAPACITY: usize = 64;

    /// Create a catalog that can cache every hexagram.
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self::with_capacity(source, Self::MAX_CAPACITY)
    }

    /// Create a catalog caching at most `capacity` records (clamped to 1-64).
    pub fn with_capacity(source: impl RecordSource + 'static, capacity: usize) -> Self {
        let capacity = capacity.clamp(1, Self::MAX_CAPACITY);
        Self {
            source: Box::new(source),
            cache: RwLock::new(HashMap::with_capacity(capacity)),
            capacity,
        }
    }

    /// Look up the record for a raw catalog number.
    ///
    /// Numbers outside 1-64 fail with [`ReadingError::InvalidCatalogNumber`].
    pub fn get(&self, number: u32) -> ReadingResult<Arc<HexagramRecord>> {
        let number =
            CatalogNumber::new(number).map_err(|_| ReadingError::InvalidCatalogNumber(number))?;
        self.lookup(number)
    }

    /// Look up the record for a validated catalog number.
    pub fn lookup(&self, number: CatalogNumber) -> ReadingResult<Arc<HexagramRecord>> {
        if let Some(record) = self.cache.read().get(&number) {
            tracing::trace!(%number, "catalog hit");
            return Ok(Arc::clone(record));
        }

        tracing::debug!(%number, "catalog miss");
        let record = self.fetch(number)?;
        Ok(self.insert(number, record))
    }

    /// Number of cached records.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether a record for `number` is cached.
    pub fn contains(&self, number: CatalogNumber) -> bool {
        self.cache.read().contains_key(&number)
    }

    /// Maximum number of cached records.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every cached record.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    fn fetch(&self, number: CatalogNumber) -> ReadingResult<HexagramRecord> {
        let record = self.source.fetch(number).map_err(|e| {
            tracing::warn!(%number, error = %e, "record fetch failed");
            match e {
                SourceError::NotFound(detail) => ReadingError::RecordNotFound {
                    number: number.get(),
                    detail,
                },
                SourceError::Malformed(reason) => ReadingError::RecordMalformed {
                    number: number.get(),
                    reason,
                },
            }
        })?;

        record.validate().map_err(|reason| {
            tracing::warn!(%number, %reason, "record failed validation");
            ReadingError::RecordMalformed {
                number: number.get(),
                reason: reason.to_string(),
            }
        })?;

        Ok(record)
    }

    fn insert(&self, number: CatalogNumber, record: HexagramRecord) -> Arc<HexagramRecord> {
        let mut cache = self.cache.write();
        if let Some(existing) = cache.get(&number) {
            return Arc::clone(existing);
        }
        if cache.len() >= self.capacity {
            // Evict the lowest number so eviction is deterministic.
            if let Some(&victim) = cache.keys().min() {
                cache.remove(&victim);
                tracing::debug!(%victim, "evicted cached record");
            }
        }
        let record = Arc::new(record);
        cache.insert(number, Arc::clone(&record));
        record
    }
}

impl std::fmt::Debug for HexagramCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HexagramCatalog")
            .field("cached", &self.cached_len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
