//! Casting and transformation engine for Yijing divination.
//!
//! Provides the four-valued divination [`Line`], the six-line [`Figure`]
//! cast from an injected random source, and the fixed [`Hexagram`] codec
//! that derives the before/after hexagrams, their changing positions, and
//! their 1-64 [`CatalogNumber`].

pub mod casting;
pub mod error;
pub mod figure;
pub mod hexagram;
pub mod line;

pub use casting::Casting;
pub use error::{CoreError, CoreResult};
pub use figure::{FIGURE_LEN, Figure};
pub use hexagram::{CatalogNumber, Hexagram, Trigram};
pub use line::{Line, LineKind, Polarity, classify};
