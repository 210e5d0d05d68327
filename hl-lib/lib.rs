//! Prefix and mask highlighting for display text.
//!
//! A [`Highlighter`] turns display text plus either a search prefix or a
//! per-character mask into a [`HighlightedText`]: the unmodified text and the
//! ordered character ranges to emphasize. Painting those ranges is left to a
//! [`TextSurface`].

pub mod config;
pub mod error;
pub mod highlighter;
pub mod mask;
pub mod prefix;
pub mod range;
pub mod style;
pub mod surface;

pub use config::HighlighterConfig;
pub use error::{
  HighlightError,
  Result,
};
pub use highlighter::Highlighter;
pub use mask::MaskSpans;
pub use prefix::CaseMatching;
pub use range::{
  HighlightRange,
  HighlightedText,
};
pub use style::{
  Color,
  Modifier,
  Style,
};
pub use surface::{
  StyledLine,
  TextSurface,
};
