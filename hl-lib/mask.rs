//! Per-character highlight masks.
//!
//! A mask is a string as long as the text (in chars) where a `'1'` at
//! position `i` marks char `i` of the text for highlighting. Any other
//! character leaves its position alone.

use serde::Deserialize;

use crate::range::HighlightRange;

/// How marked positions are turned into ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskSpans {
  /// One width-1 range per marked char.
  #[default]
  PerChar,
  /// One range per maximal run of consecutive marked chars.
  Coalesced,
}

/// Ranges marked by `mask`, or `None` when the mask does not apply: the
/// text is empty or the lengths differ.
pub fn mask_ranges(text: &str, mask: &str, spans: MaskSpans) -> Option<Vec<HighlightRange>> {
  let text_len = text.chars().count();
  let mask_len = mask.chars().count();
  if text_len != mask_len || text_len == 0 {
    tracing::debug!(
      text_len,
      mask_len,
      "mask size mismatch or text length is 0, leaving text unhighlighted"
    );
    return None;
  }

  let marked = mask
    .chars()
    .enumerate()
    .filter_map(|(idx, ch)| (ch == '1').then_some(idx));

  let ranges = match spans {
    MaskSpans::PerChar => marked.map(HighlightRange::point).collect(),
    MaskSpans::Coalesced => coalesce(marked),
  };
  Some(ranges)
}

fn coalesce(marked: impl Iterator<Item = usize>) -> Vec<HighlightRange> {
  let mut runs: Vec<(usize, usize)> = Vec::new();
  for idx in marked {
    match runs.last_mut() {
      Some((_, end)) if *end == idx => *end += 1,
      _ => runs.push((idx, idx + 1)),
    }
  }
  runs
    .into_iter()
    .filter_map(|(start, end)| HighlightRange::new(start, end))
    .collect()
}
