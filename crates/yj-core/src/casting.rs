//! A cast figure together with everything derived from it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::hexagram::{CatalogNumber, Hexagram};

/// A figure and its before/after hexagrams and changing positions.
///
/// Everything but the figure is derived from it, so the only way in is
/// [`Casting::from_figure`]. Deserializing reads the figure and derives the
/// rest; any serialized hexagrams or positions are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CastingFields")]
pub struct Casting {
    figure: Figure,
    before: Hexagram,
    after: Hexagram,
    changing: Vec<usize>,
}

#[derive(Deserialize)]
struct CastingFields {
    figure: Figure,
}

impl From<CastingFields> for Casting {
    fn from(fields: CastingFields) -> Self {
        Self::from_figure(fields.figure)
    }
}

impl Casting {
    /// Derive the hexagrams and changing positions from a figure.
    pub fn from_figure(figure: Figure) -> Self {
        let casting = Self {
            before: Hexagram::before(&figure),
            after: Hexagram::after(&figure),
            changing: figure.changing_positions(),
            figure,
        };
        tracing::debug!(
            figure = %casting.figure,
            before = %casting.before,
            after = %casting.after,
            changing = ?casting.changing,
            "derived hexagrams"
        );
        casting
    }

    /// Cast a fresh figure and derive its hexagrams.
    pub fn cast<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_figure(Figure::cast(rng))
    }

    /// The cast lines.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Hexagram of the static polarities.
    pub fn before(&self) -> Hexagram {
        self.before
    }

    /// Hexagram after the changing lines have turned.
    pub fn after(&self) -> Hexagram {
        self.after
    }

    /// Ascending 0-based positions of the changing lines.
    pub fn changing(&self) -> &[usize] {
        &self.changing
    }

    /// True if no line is changing.
    pub fn is_stable(&self) -> bool {
        self.changing.is_empty()
    }

    /// Catalog number of the before-hexagram.
    pub fn before_number(&self) -> CatalogNumber {
        self.before.catalog_number()
    }

    /// Catalog number of the after-hexagram.
    pub fn after_number(&self) -> CatalogNumber {
        self.after.catalog_number()
    }

    /// Changing positions as 1-based line numbers.
    pub fn changing_line_numbers(&self) -> Vec<u8> {
        self.figure
            .lines()
            .iter()
            .zip(1u8..)
            .filter(|(line, _)| line.is_changing())
            .map(|(_, number)| number)
            .collect()
    }
}
