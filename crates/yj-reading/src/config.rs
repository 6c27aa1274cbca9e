//! Configuration for an oracle consultation.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::HexagramCatalog;
use crate::source::DirectorySource;

/// Default directory holding the `hexagram_NN.json` records.
pub const DEFAULT_RESOURCES_DIR: &str = "resources/hexagram_json";

/// Settings for casting and record lookup.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible casts; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Directory containing the record files.
    pub resources_dir: PathBuf,
    /// Maximum number of cached records (1-64).
    pub cache_capacity: usize,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            resources_dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            cache_capacity: HexagramCatalog::MAX_CAPACITY,
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the record directory.
    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = dir.into();
        self
    }

    /// Set the cache capacity (clamped to 1-64).
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.clamp(1, HexagramCatalog::MAX_CAPACITY);
        self
    }

    /// The random source for casting.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// A record source reading from the configured directory.
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.resources_dir)
    }

    /// A catalog over the configured directory.
    pub fn catalog(&self) -> HexagramCatalog {
        HexagramCatalog::with_capacity(self.source(), self.cache_capacity)
    }
}
