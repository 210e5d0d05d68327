//! Highlight ranges and the value handed to a rendering surface.
//!
//! All positions are char indices into the display text. Renderers that
//! slice `&str` can use [`HighlightedText::byte_ranges`] or
//! [`HighlightedText::spans`] instead of converting themselves.

use std::ops::Range;

use ropey::str_utils::char_to_byte_idx;

use crate::style::Style;

/// A half-open, non-empty interval `[start, end)` of char indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HighlightRange {
  start: usize,
  end:   usize,
}

impl HighlightRange {
  /// Returns `None` for empty or inverted intervals.
  pub fn new(start: usize, end: usize) -> Option<Self> {
    (start < end).then_some(Self { start, end })
  }

  /// A single-character range.
  pub fn point(idx: usize) -> Self {
    Self {
      start: idx,
      end:   idx + 1,
    }
  }

  #[inline]
  pub fn start(&self) -> usize {
    self.start
  }

  #[inline]
  pub fn end(&self) -> usize {
    self.end
  }

  #[inline]
  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.end - self.start
  }

  #[inline]
  pub fn contains(&self, char_idx: usize) -> bool {
    self.start <= char_idx && char_idx < self.end
  }

  #[inline]
  pub fn as_range(&self) -> Range<usize> {
    self.start..self.end
  }
}

impl From<HighlightRange> for Range<usize> {
  fn from(range: HighlightRange) -> Self {
    range.as_range()
  }
}

/// The unmodified display text plus the ranges to paint with `style`.
///
/// Ranges are ascending, disjoint, and lie within the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedText<'a> {
  text:   &'a str,
  ranges: Vec<HighlightRange>,
  style:  Style,
}

impl<'a> HighlightedText<'a> {
  /// Text with nothing highlighted.
  pub fn plain(text: &'a str, style: Style) -> Self {
    Self {
      text,
      ranges: Vec::new(),
      style,
    }
  }

  pub(crate) fn new(text: &'a str, ranges: Vec<HighlightRange>, style: Style) -> Self {
    debug_assert!(
      ranges.windows(2).all(|w| w[0].end <= w[1].start),
      "highlight ranges must be ascending and disjoint: {ranges:?}"
    );
    debug_assert!(
      ranges
        .last()
        .is_none_or(|last| last.end <= text.chars().count()),
      "highlight range past end of text"
    );
    Self {
      text,
      ranges,
      style,
    }
  }

  #[inline]
  pub fn text(&self) -> &'a str {
    self.text
  }

  #[inline]
  pub fn ranges(&self) -> &[HighlightRange] {
    &self.ranges
  }

  #[inline]
  pub fn style(&self) -> Style {
    self.style
  }

  #[inline]
  pub fn is_highlighted(&self) -> bool {
    !self.ranges.is_empty()
  }

  pub fn into_ranges(self) -> Vec<HighlightRange> {
    self.ranges
  }

  /// The style of the character at `char_idx`, if it is highlighted.
  pub fn highlight_at(&self, char_idx: usize) -> Option<Style> {
    let idx = self.ranges.partition_point(|range| range.end <= char_idx);
    self
      .ranges
      .get(idx)
      .filter(|range| range.contains(char_idx))
      .map(|_| self.style)
  }

  /// The highlight ranges converted to byte offsets into [`Self::text`].
  pub fn byte_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
    self.ranges.iter().map(|range| {
      char_to_byte_idx(self.text, range.start)..char_to_byte_idx(self.text, range.end)
    })
  }

  /// Splits the text into consecutive segments, each paired with the style
  /// to paint it with. Concatenating the segments yields the text.
  pub fn spans(&self) -> Vec<(&'a str, Option<Style>)> {
    let text = self.text;
    let mut spans = Vec::with_capacity(self.ranges.len() * 2 + 1);
    let mut pos = 0;
    for range in self.byte_ranges() {
      if pos < range.start {
        spans.push((&text[pos..range.start], None));
      }
      pos = range.end;
      spans.push((&text[range], Some(self.style)));
    }
    if pos < text.len() {
      spans.push((&text[pos..], None));
    }
    spans
  }
}
