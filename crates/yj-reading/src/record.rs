//! Interpretive records, one per hexagram.
//!
//! The JSON layout mirrors the resource files:
//!
//! ```text
//! {
//!   "hexagram": { "name", "subtitle",
//!                 "trigrams": { "above": {"name", "attributes"},
//!                               "below": {"name", "attributes"} },
//!                 "meaning": { "description", "season"? } },
//!   "judgment": { "description", "analysis": [..] },
//!   "image":    { "description", "lesson", "warning"? },
//!   "lines":    [ { "position": 1..6, "text", "interpretation" } x 6 ]
//! }
//! ```
//!
//! Every field except `season` and `warning` is required.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use yj_core::FIGURE_LEN;

/// Why a record could not be parsed or failed its structural checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The JSON did not match the record layout.
    #[error("{0}")]
    Parse(String),

    /// The hexagram name is blank.
    #[error("empty hexagram name")]
    EmptyName,

    /// The record does not have six lines.
    #[error("expected 6 lines, found {0}")]
    LineCount(usize),

    /// A line is out of order.
    #[error("line {index} has position {found}, expected {index}")]
    Position {
        /// The 1-based slot in the `lines` array.
        index: u8,
        /// The position the record gave.
        found: u8,
    },
}

/// Name and attributes of one trigram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramInfo {
    /// Trigram name.
    pub name: String,
    /// Descriptive attributes.
    pub attributes: String,
}

/// Upper and lower trigram of a hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigrams {
    /// Upper trigram (lines 4-6).
    pub above: TrigramInfo,
    /// Lower trigram (lines 1-3).
    pub below: TrigramInfo,
}

/// Basic meaning of a hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Meaning text.
    pub description: String,
    /// Associated season, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

/// Header block of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramInfo {
    /// Display name.
    pub name: String,
    /// Subtitle.
    pub subtitle: String,
    /// The two trigrams.
    pub trigrams: Trigrams,
    /// Basic meaning.
    pub meaning: Meaning,
}

/// The judgment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    /// Judgment text.
    pub description: String,
    /// Analysis statements, in order.
    pub analysis: Vec<String>,
}

/// The image text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image text.
    pub description: String,
    /// The lesson drawn from the image.
    pub lesson: String,
    /// Optional warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Text and interpretation of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineText {
    /// 1-based position (1 = bottom).
    pub position: u8,
    /// Canonical line text.
    pub text: String,
    /// Interpretation.
    pub interpretation: String,
}

/// The complete interpretive record for one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    /// Name, trigrams, and meaning.
    pub hexagram: HexagramInfo,
    /// The judgment.
    pub judgment: Judgment,
    /// The image.
    pub image: Image,
    /// The six line texts, bottom first.
    pub lines: Vec<LineText>,
}

impl HexagramRecord {
    /// Parse a record from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: Self =
            serde_json::from_str(json).map_err(|e| RecordError::Parse(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    /// Check the structural invariants: a non-empty name and exactly six
    /// lines with positions 1 through 6 in order.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.hexagram.name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        if self.lines.len() != FIGURE_LEN {
            return Err(RecordError::LineCount(self.lines.len()));
        }
        for (line, index) in self.lines.iter().zip(1u8..) {
            if line.position != index {
                return Err(RecordError::Position {
                    index,
                    found: line.position,
                });
            }
        }
        Ok(())
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.hexagram.name
    }

    /// The line text at a 1-based position.
    pub fn line(&self, position: u8) -> Option<&LineText> {
        self.lines.iter().find(|line| line.position == position)
    }
}
