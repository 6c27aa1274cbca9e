//! Fixed hexagrams and their catalog numbers.
//!
//! A hexagram is six binary digits (0 = yin, 1 = yang), bottom line first.
//! The catalog number reads the digits as a 6-bit binary number with the
//! bottom line (position 0) as the most significant bit and the top line
//! (position 5) as the least significant, plus one. All-yin is therefore
//! catalog number 1 and all-yang is 64.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::figure::{FIGURE_LEN, Figure};
use crate::line::Polarity;

/// A validated catalog number in 1-64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CatalogNumber(u8);

impl CatalogNumber {
    /// Lowest catalog number.
    pub const MIN: u32 = 1;
    /// Highest catalog number.
    pub const MAX: u32 = 64;

    /// Validate a catalog number.
    pub fn new(number: u32) -> CoreResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(CoreError::InvalidCatalogNumber(number))
        }
    }

    /// The number as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every catalog number, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=64u8).map(Self)
    }
}

impl TryFrom<u32> for CatalogNumber {
    type Error = CoreError;

    fn try_from(number: u32) -> CoreResult<Self> {
        Self::new(number)
    }
}

impl From<CatalogNumber> for u32 {
    fn from(number: CatalogNumber) -> Self {
        u32::from(number.0)
    }
}

impl std::fmt::Display for CatalogNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// One of the eight three-line trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ three yang lines.
    Heaven,
    /// ☱ yin on top.
    Lake,
    /// ☲ yin in the middle.
    Fire,
    /// ☳ yang at the bottom.
    Thunder,
    /// ☴ yin at the bottom.
    Wind,
    /// ☵ yang in the middle.
    Water,
    /// ☶ yang on top.
    Mountain,
    /// ☷ three yin lines.
    Earth,
}

impl Trigram {
    /// Identify a trigram from three polarities, bottom first.
    pub fn from_lines(lines: [Polarity; 3]) -> Self {
        use Polarity::{Yang, Yin};
        match lines {
            [Yang, Yang, Yang] => Self::Heaven,
            [Yang, Yang, Yin] => Self::Lake,
            [Yang, Yin, Yang] => Self::Fire,
            [Yang, Yin, Yin] => Self::Thunder,
            [Yin, Yang, Yang] => Self::Wind,
            [Yin, Yang, Yin] => Self::Water,
            [Yin, Yin, Yang] => Self::Mountain,
            [Yin, Yin, Yin] => Self::Earth,
        }
    }

    /// The unicode trigram symbol.
    pub fn glyph(self) -> char {
        match self {
            Self::Heaven => '☰',
            Self::Lake => '☱',
            Self::Fire => '☲',
            Self::Thunder => '☳',
            Self::Wind => '☴',
            Self::Water => '☵',
            Self::Mountain => '☶',
            Self::Earth => '☷',
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heaven => write!(f, "Heaven"),
            Self::Lake => write!(f, "Lake"),
            Self::Fire => write!(f, "Fire"),
            Self::Thunder => write!(f, "Thunder"),
            Self::Wind => write!(f, "Wind"),
            Self::Water => write!(f, "Water"),
            Self::Mountain => write!(f, "Mountain"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// Six fixed lines with no changing-line state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 6]", into = "[u8; 6]")]
pub struct Hexagram([Polarity; FIGURE_LEN]);

impl Hexagram {
    /// Build from polarities, bottom first.
    pub fn new(lines: [Polarity; FIGURE_LEN]) -> Self {
        Self(lines)
    }

    /// Build from binary digits, bottom first.
    pub fn from_digits(digits: [u8; FIGURE_LEN]) -> CoreResult<Self> {
        let mut lines = [Polarity::Yin; FIGURE_LEN];
        for (position, (slot, digit)) in lines.iter_mut().zip(digits).enumerate() {
            *slot = Polarity::from_bit(digit).ok_or(CoreError::InvalidDigit { position, digit })?;
        }
        Ok(Self(lines))
    }

    /// The hexagram with the given catalog number.
    pub fn from_catalog_number(number: CatalogNumber) -> Self {
        let value = number.get() - 1;
        Self(std::array::from_fn(|position| {
            if (value >> (FIGURE_LEN - 1 - position)) & 1 == 1 {
                Polarity::Yang
            } else {
                Polarity::Yin
            }
        }))
    }

    /// The hexagram before transformation: each line's static polarity.
    pub fn before(figure: &Figure) -> Self {
        Self(figure.lines().map(|line| line.static_polarity()))
    }

    /// The hexagram after transformation: changing lines flipped.
    pub fn after(figure: &Figure) -> Self {
        Self(figure.lines().map(|line| line.resolved_polarity()))
    }

    /// The polarities, bottom first.
    pub fn lines(&self) -> &[Polarity; FIGURE_LEN] {
        &self.0
    }

    /// The binary digits, bottom first.
    pub fn digits(&self) -> [u8; FIGURE_LEN] {
        self.0.map(Polarity::bit)
    }

    /// The 6-bit value (0-63), bottom line most significant.
    pub fn binary_value(&self) -> u8 {
        self.0
            .iter()
            .fold(0u8, |acc, polarity| (acc << 1) | polarity.bit())
    }

    /// The catalog number (1-64).
    pub fn catalog_number(&self) -> CatalogNumber {
        CatalogNumber(self.binary_value() + 1)
    }

    /// Count of (yin, yang) lines.
    pub fn yin_yang_count(&self) -> (usize, usize) {
        let yang = self.0.iter().filter(|p| **p == Polarity::Yang).count();
        (FIGURE_LEN - yang, yang)
    }

    /// The lower trigram (positions 0-2).
    pub fn lower_trigram(&self) -> Trigram {
        Trigram::from_lines([self.0[0], self.0[1], self.0[2]])
    }

    /// The upper trigram (positions 3-5).
    pub fn upper_trigram(&self) -> Trigram {
        Trigram::from_lines([self.0[3], self.0[4], self.0[5]])
    }

    /// Every line flipped.
    pub fn complement(&self) -> Self {
        Self(self.0.map(Polarity::flip))
    }

    /// One glyph per line, bottom first, chosen by polarity only.
    pub fn to_glyphs(self) -> String {
        self.0.iter().map(|p| p.glyph()).collect()
    }
}

impl TryFrom<[u8; FIGURE_LEN]> for Hexagram {
    type Error = CoreError;

    fn try_from(digits: [u8; FIGURE_LEN]) -> CoreResult<Self> {
        Self::from_digits(digits)
    }
}

impl From<Hexagram> for [u8; FIGURE_LEN] {
    fn from(hexagram: Hexagram) -> Self {
        hexagram.digits()
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn figure(values: [u8; 6]) -> Figure {
        Figure::from_values(&values).unwrap()
    }

    fn hex(digits: [u8; 6]) -> Hexagram {
        Hexagram::from_digits(digits).unwrap()
    }

    #[test]
    fn bit_order_reference_points() {
        assert_eq!(hex([0, 0, 0, 0, 0, 0]).catalog_number().get(), 1);
        assert_eq!(hex([1, 1, 1, 1, 1, 1]).catalog_number().get(), 64);
        // Bottom line is the most significant bit.
        assert_eq!(hex([1, 0, 0, 0, 0, 0]).catalog_number().get(), 33);
        assert_eq!(hex([0, 0, 0, 0, 0, 1]).catalog_number().get(), 2);
        assert_eq!(hex([0, 1, 0, 1, 1, 0]).binary_value(), 0b010110);
    }

    #[test]
    fn all_stable_yang() {
        let f = figure([7, 7, 7, 7, 7, 7]);
        let before = Hexagram::before(&f);
        assert_eq!(before.to_string(), "111111");
        assert_eq!(before.catalog_number().get(), 64);
        assert_eq!(Hexagram::after(&f), before);
    }

    #[test]
    fn all_changing_yin() {
        let f = figure([6, 6, 6, 6, 6, 6]);
        let before = Hexagram::before(&f);
        let after = Hexagram::after(&f);
        assert_eq!(before.to_string(), "000000");
        assert_eq!(before.catalog_number().get(), 1);
        assert_eq!(after.to_string(), "111111");
        assert_eq!(after.catalog_number().get(), 64);
    }

    #[test]
    fn mixed_figure() {
        let f = figure([6, 7, 8, 9, 7, 8]);
        assert_eq!(Hexagram::before(&f).to_string(), "010110");
        assert_eq!(Hexagram::after(&f).to_string(), "110010");
    }

    #[test]
    fn from_digits_rejects_bad_digit() {
        assert_eq!(
            Hexagram::from_digits([0, 1, 2, 0, 0, 0]),
            Err(CoreError::InvalidDigit {
                position: 2,
                digit: 2
            })
        );
    }

    #[test]
    fn catalog_number_bounds() {
        assert!(CatalogNumber::new(0).is_err());
        assert!(CatalogNumber::new(65).is_err());
        assert_eq!(CatalogNumber::new(1).unwrap().get(), 1);
        assert_eq!(CatalogNumber::new(64).unwrap().get(), 64);
        assert_eq!(CatalogNumber::all().count(), 64);
    }

    #[test]
    fn from_catalog_number_inverts() {
        for number in CatalogNumber::all() {
            assert_eq!(Hexagram::from_catalog_number(number).catalog_number(), number);
        }
    }

    #[test]
    fn glyphs_follow_polarity() {
        assert_eq!(hex([1, 0, 1, 0, 0, 1]).to_glyphs(), "⚊⚋⚊⚋⚋⚊");
        assert_eq!(Hexagram::before(&figure([9, 6, 7, 8, 8, 9])).to_glyphs(), "⚊⚋⚊⚋⚋⚊");
    }

    #[test]
    fn trigrams() {
        let h = hex([1, 0, 0, 0, 1, 0]);
        assert_eq!(h.lower_trigram(), Trigram::Thunder);
        assert_eq!(h.upper_trigram(), Trigram::Water);
        assert_eq!(hex([1, 1, 1, 0, 0, 0]).upper_trigram(), Trigram::Earth);
        assert_eq!(Trigram::Mountain.glyph(), '☶');
        assert_eq!(Trigram::Lake.to_string(), "Lake");
    }

    #[test]
    fn yin_yang_count() {
        assert_eq!(hex([1, 0, 1, 0, 0, 1]).yin_yang_count(), (3, 3));
        assert_eq!(hex([1, 1, 1, 1, 1, 0]).yin_yang_count(), (1, 5));
    }

    #[test]
    fn serde_as_digits() {
        let h = hex([1, 0, 1, 1, 0, 0]);
        assert_eq!(serde_json::to_string(&h).unwrap(), "[1,0,1,1,0,0]");
        assert!(serde_json::from_str::<Hexagram>("[1,0,3,1,0,0]").is_err());
        assert_eq!(
            serde_json::to_string(&CatalogNumber::new(12).unwrap()).unwrap(),
            "12"
        );
        assert!(serde_json::from_str::<CatalogNumber>("65").is_err());
    }

    fn line_value() -> impl Strategy<Value = u8> {
        prop::sample::select(vec![6u8, 7, 8, 9])
    }

    proptest! {
        #[test]
        fn catalog_number_is_binary_plus_one(digits in prop::array::uniform6(0u8..=1)) {
            let h = Hexagram::from_digits(digits).unwrap();
            let expected = digits.iter().fold(0u32, |acc, d| acc * 2 + u32::from(*d)) + 1;
            prop_assert_eq!(u32::from(h.catalog_number()), expected);
            prop_assert_eq!(Hexagram::from_catalog_number(h.catalog_number()), h);
        }

        #[test]
        fn stable_figures_do_not_transform(values in prop::array::uniform6(prop::sample::select(vec![7u8, 8]))) {
            let f = Figure::from_values(&values).unwrap();
            prop_assert_eq!(Hexagram::after(&f), Hexagram::before(&f));
            prop_assert!(f.changing_positions().is_empty());
        }

        #[test]
        fn fully_changing_figures_complement(values in prop::array::uniform6(prop::sample::select(vec![6u8, 9]))) {
            let f = Figure::from_values(&values).unwrap();
            prop_assert_eq!(Hexagram::after(&f), Hexagram::before(&f).complement());
            prop_assert_eq!(f.changing_positions(), vec![0, 1, 2, 3, 4, 5]);
        }

        #[test]
        fn after_differs_exactly_at_changing_positions(values in prop::array::uniform6(line_value())) {
            let f = Figure::from_values(&values).unwrap();
            let before = Hexagram::before(&f);
            let after = Hexagram::after(&f);
            let differing: Vec<usize> = (0..6)
                .filter(|&i| before.lines()[i] != after.lines()[i])
                .collect();
            prop_assert_eq!(differing, f.changing_positions());
        }
    }

    #[test]
    fn catalog_mapping_is_bijective() {
        let mut seen = std::collections::HashSet::new();
        for value in 0u8..64 {
            let digits = std::array::from_fn(|i| (value >> (5 - i)) & 1);
            seen.insert(hex(digits).catalog_number());
        }
        assert_eq!(seen.len(), 64);
    }
}
