//! JSON files on disk, one per hexagram.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use yj_core::CatalogNumber;

use super::{RecordSource, SourceError};
use crate::record::HexagramRecord;

/// Reads `hexagram_NN.json` files (two-digit, zero-padded) from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory records are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name for a catalog number, e.g. `hexagram_01.json`.
    pub fn file_name(number: CatalogNumber) -> String {
        format!("hexagram_{:02}.json", number.get())
    }

    /// Full path of the record file for a catalog number.
    pub fn path_for(&self, number: CatalogNumber) -> PathBuf {
        self.root.join(Self::file_name(number))
    }
}

impl RecordSource for DirectorySource {
    fn fetch(&self, number: CatalogNumber) -> Result<HexagramRecord, SourceError> {
        let path = self.path_for(number);
        tracing::debug!(path = %path.display(), "reading hexagram record");

        let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
            _ => SourceError::Malformed(format!("{}: {e}", path.display())),
        })?;

        HexagramRecord::from_json(&contents)
            .map_err(|e| SourceError::Malformed(format!("{}: {e}", path.display())))
    }
}
