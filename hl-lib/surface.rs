//! The seam between highlighting and whatever paints the text.

use crate::{
  range::HighlightedText,
  style::Style,
};

/// A display surface that accepts highlighted text, e.g. a label widget or
/// a terminal line.
pub trait TextSurface {
  fn set_text(&mut self, text: HighlightedText<'_>);
}

impl<F: FnMut(HighlightedText<'_>)> TextSurface for F {
  fn set_text(&mut self, text: HighlightedText<'_>) {
    (*self)(text)
  }
}

/// An owned line of styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
  segments: Vec<(String, Option<Style>)>,
}

impl StyledLine {
  pub fn segments(&self) -> &[(String, Option<Style>)] {
    &self.segments
  }

  pub fn text(&self) -> String {
    self.segments.iter().map(|(segment, _)| segment.as_str()).collect()
  }

  /// The segments painted with a style, in order.
  pub fn highlighted(&self) -> impl Iterator<Item = &str> {
    self
      .segments
      .iter()
      .filter(|(_, style)| style.is_some())
      .map(|(segment, _)| segment.as_str())
  }
}

impl From<HighlightedText<'_>> for StyledLine {
  fn from(text: HighlightedText<'_>) -> Self {
    let segments = text
      .spans()
      .into_iter()
      .map(|(segment, style)| (segment.to_owned(), style))
      .collect();
    Self { segments }
  }
}

impl TextSurface for StyledLine {
  fn set_text(&mut self, text: HighlightedText<'_>) {
    *self = StyledLine::from(text);
  }
}
