//! The highlight applier.

use crate::{
  config::HighlighterConfig,
  error::{
    HighlightError,
    Result,
  },
  mask::{
    MaskSpans,
    mask_ranges,
  },
  prefix::{
    CaseMatching,
    word_prefix_range,
  },
  range::HighlightedText,
  style::{
    Color,
    Style,
  },
  surface::TextSurface,
};

/// Computes highlight ranges for display text.
///
/// The style token is derived from the configured colour once, at
/// construction, and shared by every result this highlighter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlighter {
  style:      Style,
  case:       CaseMatching,
  mask_spans: MaskSpans,
}

impl Default for Highlighter {
  fn default() -> Self {
    Self::with_config(HighlighterConfig::default())
  }
}

impl Highlighter {
  pub fn new(color: Color) -> Self {
    Self::with_config(HighlighterConfig::new(color))
  }

  pub fn with_config(config: HighlighterConfig) -> Self {
    Self {
      style:      config.style(),
      case:       config.case,
      mask_spans: config.mask_spans,
    }
  }

  #[inline]
  pub fn style(&self) -> Style {
    self.style
  }

  /// Highlights the first word in `text` that starts with `prefix`.
  ///
  /// Leading non letter-or-digit characters of `prefix` are ignored. An
  /// absent prefix, or one with no word-start match, leaves the text
  /// unhighlighted.
  pub fn apply_prefix_highlight<'a>(
    &self,
    text: &'a str,
    prefix: Option<&str>,
  ) -> HighlightedText<'a> {
    match word_prefix_range(text, prefix, self.case) {
      Some(range) => HighlightedText::new(text, vec![range], self.style),
      None => HighlightedText::plain(text, self.style),
    }
  }

  /// Highlights every char of `text` whose position in `mask` is `'1'`.
  ///
  /// A mask whose length differs from the text, or an empty text, leaves
  /// the text unhighlighted.
  pub fn apply_mask_highlight<'a>(&self, text: &'a str, mask: &str) -> HighlightedText<'a> {
    match mask_ranges(text, mask, self.mask_spans) {
      Some(ranges) => HighlightedText::new(text, ranges, self.style),
      None => HighlightedText::plain(text, self.style),
    }
  }

  /// [`Self::apply_mask_highlight`] for inputs that may be absent. Both are
  /// required.
  pub fn try_apply_mask_highlight<'a>(
    &self,
    text: Option<&'a str>,
    mask: Option<&str>,
  ) -> Result<HighlightedText<'a>> {
    let text = text.ok_or(HighlightError::InvalidArgument { name: "text" })?;
    let mask = mask.ok_or(HighlightError::InvalidArgument { name: "mask" })?;
    Ok(self.apply_mask_highlight(text, mask))
  }

  /// Sets `text` on `surface` with the word matching `prefix` highlighted.
  pub fn set_prefix_text<S: TextSurface + ?Sized>(
    &self,
    surface: &mut S,
    text: &str,
    prefix: Option<&str>,
  ) {
    surface.set_text(self.apply_prefix_highlight(text, prefix));
  }

  /// Sets `text` on `surface` with the chars marked by `mask` highlighted.
  pub fn set_mask_text<S: TextSurface + ?Sized>(
    &self,
    surface: &mut S,
    text: &str,
    mask: &str,
  ) {
    surface.set_text(self.apply_mask_highlight(text, mask));
  }
}
