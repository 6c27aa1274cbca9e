//! Assembly of the reading context handed to the text-generation layer.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use yj_core::{CatalogNumber, Casting, Figure};

use crate::catalog::HexagramCatalog;
use crate::error::{ReadingError, ReadingResult};
use crate::record::{HexagramRecord, LineText};

/// Everything one consultation needs: the cast, both records, and the line
/// texts of the changing lines.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingContext {
    /// The cast figure and its derived hexagrams.
    pub casting: Casting,
    /// Catalog number of the before-hexagram.
    pub before_number: CatalogNumber,
    /// Catalog number of the after-hexagram.
    pub after_number: CatalogNumber,
    /// Record of the before-hexagram.
    pub before: Arc<HexagramRecord>,
    /// Record of the after-hexagram.
    pub after: Arc<HexagramRecord>,
    /// Line texts of the before-hexagram at each changing position,
    /// ascending, with 1-based positions.
    pub relevant_lines: Vec<LineText>,
}

impl ReadingContext {
    /// True if the figure had changing lines.
    pub fn has_changes(&self) -> bool {
        !self.relevant_lines.is_empty()
    }

    /// A compact digest of the reading.
    pub fn summary(&self) -> ReadingSummary {
        ReadingSummary {
            before_name: self.before.name().to_string(),
            before_number: self.before_number,
            after_name: self.after.name().to_string(),
            after_number: self.after_number,
            changing_lines: self.casting.changing_line_numbers(),
        }
    }
}

/// Names, numbers, and changing lines of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingSummary {
    /// Name of the before-hexagram.
    pub before_name: String,
    /// Catalog number of the before-hexagram.
    pub before_number: CatalogNumber,
    /// Name of the after-hexagram.
    pub after_name: String,
    /// Catalog number of the after-hexagram.
    pub after_number: CatalogNumber,
    /// 1-based changing line positions.
    pub changing_lines: Vec<u8>,
}

impl std::fmt::Display for ReadingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.before_name, self.before_number)?;
        if self.changing_lines.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = self.changing_lines.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            " -> {} ({}), changing lines {}",
            self.after_name,
            self.after_number,
            lines.join(", ")
        )
    }
}

/// Select the line texts at the given 1-based positions, in order.
///
/// Fails with [`ReadingError::LineIndexOutOfRange`] if any position has no
/// matching line in the record.
pub fn select_lines(
    record: &HexagramRecord,
    number: CatalogNumber,
    positions: &[u8],
) -> ReadingResult<Vec<LineText>> {
    positions
        .iter()
        .map(|&position| {
            record
                .line(position)
                .cloned()
                .ok_or(ReadingError::LineIndexOutOfRange {
                    number: number.get(),
                    position,
                })
        })
        .collect()
}

/// Builds reading contexts from casts using a shared catalog.
#[derive(Debug, Clone, Copy)]
pub struct ReadingBuilder<'a> {
    catalog: &'a HexagramCatalog,
}

impl<'a> ReadingBuilder<'a> {
    /// Create a builder over `catalog`.
    pub fn new(catalog: &'a HexagramCatalog) -> Self {
        Self { catalog }
    }

    /// Build the context for a figure.
    pub fn build(&self, figure: &Figure) -> ReadingResult<ReadingContext> {
        self.build_casting(Casting::from_figure(*figure))
    }

    /// Build the context for a casting. A [`Casting`] can only be built from
    /// its figure, so the hexagrams and positions used here always agree
    /// with the cast lines.
    pub fn build_casting(&self, casting: Casting) -> ReadingResult<ReadingContext> {
        let before_number = casting.before_number();
        let after_number = casting.after_number();

        let before = self.catalog.lookup(before_number)?;
        let after = self.catalog.lookup(after_number)?;

        let relevant_lines = select_lines(&before, before_number, &casting.changing_line_numbers())?;

        tracing::debug!(
            before = %before_number,
            after = %after_number,
            changing = relevant_lines.len(),
            "built reading context"
        );

        Ok(ReadingContext {
            casting,
            before_number,
            after_number,
            before,
            after,
            relevant_lines,
        })
    }

    /// Cast a fresh figure with `rng` and build its context.
    pub fn cast_and_build<R: Rng + ?Sized>(&self, rng: &mut R) -> ReadingResult<ReadingContext> {
        self.build_casting(Casting::cast(rng))
    }
}
