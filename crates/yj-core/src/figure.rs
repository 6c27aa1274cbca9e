//! Six-line figures and casting.
//!
//! Each line is drawn uniformly from {6, 7, 8, 9}, so every one of the four
//! classical states has a 25% chance per line. This follows the usual
//! reading convention of the oracle and does not model the real odds of
//! the three-coin or yarrow-stalk methods.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::line::Line;

/// Number of lines in a figure or hexagram.
pub const FIGURE_LEN: usize = 6;

/// Six cast lines. Position 0 is the bottom line, position 5 the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Figure([Line; FIGURE_LEN]);

impl Figure {
    /// Build a figure from six lines.
    pub fn new(lines: [Line; FIGURE_LEN]) -> Self {
        Self(lines)
    }

    /// Build a figure from raw values, bottom line first.
    pub fn from_values(values: &[u8]) -> CoreResult<Self> {
        if values.len() != FIGURE_LEN {
            return Err(CoreError::InvalidLineCount(values.len()));
        }
        let mut lines = [Line::STABLE_YANG; FIGURE_LEN];
        for (slot, &value) in lines.iter_mut().zip(values) {
            *slot = Line::new(value)?;
        }
        Ok(Self(lines))
    }

    /// Cast a new figure: six independent uniform draws from {6, 7, 8, 9}.
    pub fn cast<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lines = std::array::from_fn(|_| Line::ALL[rng.random_range(0..Line::ALL.len())]);
        let figure = Self(lines);
        tracing::debug!(lines = %figure, "cast figure");
        figure
    }

    /// The lines, bottom first.
    pub fn lines(&self) -> &[Line; FIGURE_LEN] {
        &self.0
    }

    /// The line at a 0-based position.
    pub fn line(&self, position: usize) -> Option<Line> {
        self.0.get(position).copied()
    }

    /// Raw values, bottom first.
    pub fn values(&self) -> [u8; FIGURE_LEN] {
        self.0.map(Line::value)
    }

    /// Ascending 0-based positions of the changing lines.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(i, _)| i)
            .collect()
    }

    /// True if no line is changing.
    pub fn is_stable(&self) -> bool {
        !self.0.iter().any(|line| line.is_changing())
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.0.iter().map(|l| l.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_values() {
        let figure = Figure::from_values(&[6, 7, 8, 9, 7, 8]).unwrap();
        assert_eq!(figure.values(), [6, 7, 8, 9, 7, 8]);
        assert_eq!(figure.line(0), Some(Line::CHANGING_YIN));
        assert_eq!(figure.line(6), None);
    }

    #[test]
    fn from_values_rejects_wrong_length() {
        assert_eq!(
            Figure::from_values(&[7, 7, 7]),
            Err(CoreError::InvalidLineCount(3))
        );
        assert_eq!(
            Figure::from_values(&[7; 7]),
            Err(CoreError::InvalidLineCount(7))
        );
    }

    #[test]
    fn from_values_rejects_bad_line() {
        assert_eq!(
            Figure::from_values(&[7, 7, 7, 10, 7, 7]),
            Err(CoreError::InvalidLineValue(10))
        );
    }

    #[test]
    fn changing_positions_ascending() {
        let figure = Figure::from_values(&[6, 7, 8, 9, 7, 8]).unwrap();
        assert_eq!(figure.changing_positions(), vec![0, 3]);
        assert!(!figure.is_stable());
    }

    #[test]
    fn no_changing_positions() {
        let figure = Figure::from_values(&[7, 8, 7, 8, 7, 8]).unwrap();
        assert!(figure.changing_positions().is_empty());
        assert!(figure.is_stable());
    }

    #[test]
    fn cast_produces_valid_lines() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let figure = Figure::cast(&mut rng);
            for line in figure.lines() {
                assert!((6..=9).contains(&line.value()));
            }
        }
    }

    #[test]
    fn cast_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(Figure::cast(&mut rng1), Figure::cast(&mut rng2));
        }
    }

    #[test]
    fn cast_covers_all_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 4];
        for _ in 0..1000 {
            for line in Figure::cast(&mut rng).lines() {
                counts[usize::from(line.value() - 6)] += 1;
            }
        }
        // 6000 draws, 1500 expected per value.
        for count in counts {
            assert!((1200..=1800).contains(&count), "counts: {counts:?}");
        }
    }

    #[test]
    fn display() {
        let figure = Figure::from_values(&[6, 7, 8, 9, 7, 8]).unwrap();
        assert_eq!(figure.to_string(), "[6, 7, 8, 9, 7, 8]");
    }

    #[test]
    fn serde_as_values() {
        let figure = Figure::from_values(&[9, 9, 6, 6, 7, 8]).unwrap();
        let json = serde_json::to_string(&figure).unwrap();
        assert_eq!(json, "[9,9,6,6,7,8]");
        let back: Figure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, figure);
    }
}
