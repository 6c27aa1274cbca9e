//! Single divination lines.
//!
//! A line carries one of four values: 6 (changing yin), 7 (stable yang),
//! 8 (stable yin) or 9 (changing yang). Polarity and volatility are derived
//! from the value, never stored.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Glyph for a yang line.
pub const YANG_GLYPH: char = '⚊';
/// Glyph for a yin line.
pub const YIN_GLYPH: char = '⚋';

/// The polarity of a line or hexagram digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Broken line, digit 0.
    Yin,
    /// Solid line, digit 1.
    Yang,
}

impl Polarity {
    /// The binary digit for this polarity (0 for yin, 1 for yang).
    pub fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Parse a binary digit.
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Yin),
            1 => Some(Self::Yang),
            _ => None,
        }
    }

    /// The opposite polarity.
    pub fn flip(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// The unicode glyph for this polarity.
    pub fn glyph(self) -> char {
        match self {
            Self::Yin => YIN_GLYPH,
            Self::Yang => YANG_GLYPH,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// The four classical line states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Old yin (6): yin now, becomes yang.
    ChangingYin,
    /// Young yang (7).
    StableYang,
    /// Young yin (8).
    StableYin,
    /// Old yang (9): yang now, becomes yin.
    ChangingYang,
}

impl LineKind {
    /// True for 6 and 8.
    pub fn is_yin(self) -> bool {
        matches!(self, Self::ChangingYin | Self::StableYin)
    }

    /// True for 7 and 9.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::StableYang | Self::ChangingYang)
    }

    /// True for 6 and 9.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::ChangingYin | Self::ChangingYang)
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChangingYin => write!(f, "changing yin"),
            Self::StableYang => write!(f, "stable yang"),
            Self::StableYin => write!(f, "stable yin"),
            Self::ChangingYang => write!(f, "changing yang"),
        }
    }
}

/// Classify a raw line value.
///
/// Returns [`CoreError::InvalidLineValue`] for anything outside 6-9.
pub fn classify(value: u8) -> CoreResult<LineKind> {
    Line::new(value).map(Line::kind)
}

/// A single divination line, valued 6, 7, 8 or 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Line(u8);

impl Line {
    /// Changing yin (6).
    pub const CHANGING_YIN: Self = Self(6);
    /// Stable yang (7).
    pub const STABLE_YANG: Self = Self(7);
    /// Stable yin (8).
    pub const STABLE_YIN: Self = Self(8);
    /// Changing yang (9).
    pub const CHANGING_YANG: Self = Self(9);

    /// Every legal line, in value order.
    pub const ALL: [Self; 4] = [
        Self::CHANGING_YIN,
        Self::STABLE_YANG,
        Self::STABLE_YIN,
        Self::CHANGING_YANG,
    ];

    /// Construct a line, rejecting values outside {6, 7, 8, 9}.
    pub fn new(value: u8) -> CoreResult<Self> {
        match value {
            6..=9 => Ok(Self(value)),
            other => Err(CoreError::InvalidLineValue(other)),
        }
    }

    /// The raw value (6-9).
    pub fn value(self) -> u8 {
        self.0
    }

    /// The classical state of this line.
    pub fn kind(self) -> LineKind {
        match self.0 {
            6 => LineKind::ChangingYin,
            7 => LineKind::StableYang,
            8 => LineKind::StableYin,
            _ => LineKind::ChangingYang,
        }
    }

    /// True for 6 and 8.
    pub fn is_yin(self) -> bool {
        self.kind().is_yin()
    }

    /// True for 7 and 9.
    pub fn is_yang(self) -> bool {
        self.kind().is_yang()
    }

    /// True for 6 and 9.
    pub fn is_changing(self) -> bool {
        self.kind().is_changing()
    }

    /// Polarity used for the before-hexagram.
    pub fn static_polarity(self) -> Polarity {
        if self.is_yang() {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Polarity a changing line turns into; `None` for stable lines.
    pub fn transformed_polarity(self) -> Option<Polarity> {
        match self.kind() {
            LineKind::ChangingYin => Some(Polarity::Yang),
            LineKind::ChangingYang => Some(Polarity::Yin),
            LineKind::StableYang | LineKind::StableYin => None,
        }
    }

    /// Polarity used for the after-hexagram.
    pub fn resolved_polarity(self) -> Polarity {
        self.transformed_polarity()
            .unwrap_or_else(|| self.static_polarity())
    }

    /// Glyph of the static polarity.
    pub fn glyph(self) -> char {
        self.static_polarity().glyph()
    }
}

impl TryFrom<u8> for Line {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Line> for u8 {
    fn from(line: Line) -> Self {
        line.0
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_all_values() {
        let six = classify(6).unwrap();
        assert!(six.is_yin() && six.is_changing() && !six.is_yang());

        let seven = classify(7).unwrap();
        assert!(seven.is_yang() && !seven.is_changing() && !seven.is_yin());

        let eight = classify(8).unwrap();
        assert!(eight.is_yin() && !eight.is_changing() && !eight.is_yang());

        let nine = classify(9).unwrap();
        assert!(nine.is_yang() && nine.is_changing() && !nine.is_yin());
    }

    #[test]
    fn classification_is_exclusive() {
        for line in Line::ALL {
            assert_ne!(line.is_yin(), line.is_yang(), "line {line}");
        }
    }

    #[test]
    fn rejects_out_of_domain() {
        for value in [0, 1, 5, 10, 255] {
            assert_eq!(Line::new(value), Err(CoreError::InvalidLineValue(value)));
            assert!(classify(value).is_err());
        }
    }

    #[test]
    fn static_polarity() {
        assert_eq!(Line::CHANGING_YIN.static_polarity(), Polarity::Yin);
        assert_eq!(Line::STABLE_YANG.static_polarity(), Polarity::Yang);
        assert_eq!(Line::STABLE_YIN.static_polarity(), Polarity::Yin);
        assert_eq!(Line::CHANGING_YANG.static_polarity(), Polarity::Yang);
    }

    #[test]
    fn transformed_polarity_only_for_changing() {
        assert_eq!(
            Line::CHANGING_YIN.transformed_polarity(),
            Some(Polarity::Yang)
        );
        assert_eq!(
            Line::CHANGING_YANG.transformed_polarity(),
            Some(Polarity::Yin)
        );
        assert_eq!(Line::STABLE_YANG.transformed_polarity(), None);
        assert_eq!(Line::STABLE_YIN.transformed_polarity(), None);
    }

    #[test]
    fn resolved_polarity_falls_back_to_static() {
        assert_eq!(Line::STABLE_YANG.resolved_polarity(), Polarity::Yang);
        assert_eq!(Line::STABLE_YIN.resolved_polarity(), Polarity::Yin);
        assert_eq!(Line::CHANGING_YIN.resolved_polarity(), Polarity::Yang);
        assert_eq!(Line::CHANGING_YANG.resolved_polarity(), Polarity::Yin);
    }

    #[test]
    fn polarity_bits() {
        assert_eq!(Polarity::Yin.bit(), 0);
        assert_eq!(Polarity::Yang.bit(), 1);
        assert_eq!(Polarity::from_bit(1), Some(Polarity::Yang));
        assert_eq!(Polarity::from_bit(2), None);
        assert_eq!(Polarity::Yin.flip(), Polarity::Yang);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Line::STABLE_YANG.glyph(), '⚊');
        assert_eq!(Line::CHANGING_YANG.glyph(), '⚊');
        assert_eq!(Line::STABLE_YIN.glyph(), '⚋');
        assert_eq!(Line::CHANGING_YIN.glyph(), '⚋');
    }

    #[test]
    fn serde_uses_raw_value() {
        let json = serde_json::to_string(&Line::CHANGING_YANG).unwrap();
        assert_eq!(json, "9");
        let back: Line = serde_json::from_str("6").unwrap();
        assert_eq!(back, Line::CHANGING_YIN);
        assert!(serde_json::from_str::<Line>("5").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Line::STABLE_YIN.to_string(), "8");
        assert_eq!(LineKind::ChangingYin.to_string(), "changing yin");
        assert_eq!(Polarity::Yang.to_string(), "yang");
    }
}
