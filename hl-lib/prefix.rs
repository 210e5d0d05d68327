//! Word-prefix search.
//!
//! A prefix matches where it occurs literally in the text *and* the match
//! starts a word: the character before it is absent or is not a letter or
//! digit. Only the first qualifying occurrence is reported.
//!
//! ```
//! use hl_lib::prefix::{CaseMatching, find_word_prefix};
//!
//! let text = "bob smith";
//! assert_eq!(find_word_prefix(text, Some("smi"), CaseMatching::Respect), Some(4));
//! // "mit" only occurs mid-word
//! assert_eq!(find_word_prefix(text, Some("mit"), CaseMatching::Respect), None);
//! // leading punctuation in the prefix is ignored
//! assert_eq!(find_word_prefix(text, Some("-smith"), CaseMatching::Respect), Some(4));
//! ```

use hl_core::chars::{
  char_is_letter_or_digit,
  is_word_boundary,
};
use serde::Deserialize;

use crate::{
  error::{
    HighlightError,
    Result,
  },
  range::HighlightRange,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMatching {
  /// Characters must be identical.
  #[default]
  Respect,
  /// Characters are compared by their simple (single char) uppercase
  /// mapping. Chars whose uppercase form expands, like `ß`, only match
  /// themselves.
  Ignore,
}

impl CaseMatching {
  #[inline]
  fn chars_eq(self, a: char, b: char) -> bool {
    match self {
      CaseMatching::Respect => a == b,
      CaseMatching::Ignore => a == b || simple_uppercase(a) == simple_uppercase(b),
    }
  }

  fn starts_with(self, text: &str, prefix: &str) -> bool {
    match self {
      CaseMatching::Respect => text.starts_with(prefix),
      CaseMatching::Ignore => {
        let mut text = text.chars();
        prefix
          .chars()
          .all(|p| text.next().is_some_and(|t| self.chars_eq(t, p)))
      },
    }
  }
}

fn simple_uppercase(ch: char) -> char {
  let mut upper = ch.to_uppercase();
  match (upper.next(), upper.next()) {
    (Some(upper), None) => upper,
    _ => ch,
  }
}

/// Strips the leading characters of `prefix` that are neither letters nor
/// digits.
pub fn trim_prefix(prefix: &str) -> &str {
  prefix.trim_start_matches(|ch: char| !char_is_letter_or_digit(ch))
}

/// Char index of the first word-start occurrence of the trimmed `prefix`.
///
/// An absent prefix, or one that trims to nothing, never matches.
pub fn find_word_prefix(text: &str, prefix: Option<&str>, case: CaseMatching) -> Option<usize> {
  word_prefix_range(text, prefix, case).map(|range| range.start())
}

/// Like [`find_word_prefix`], but returns the matched range.
pub fn word_prefix_range(
  text: &str,
  prefix: Option<&str>,
  case: CaseMatching,
) -> Option<HighlightRange> {
  let prefix = trim_prefix(prefix?);
  if prefix.is_empty() {
    return None;
  }
  let prefix_len = prefix.chars().count();

  let mut prev = None;
  for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
    if is_word_boundary(prev) && case.starts_with(&text[byte_idx..], prefix) {
      tracing::trace!(prefix, char_idx, "word prefix match");
      return HighlightRange::new(char_idx, char_idx + prefix_len);
    }
    prev = Some(ch);
  }
  None
}

/// Boundary form of [`find_word_prefix`] for inputs that may be absent.
pub fn try_find_word_prefix(
  text: Option<&str>,
  prefix: Option<&str>,
  case: CaseMatching,
) -> Result<Option<usize>> {
  let text = text.ok_or(HighlightError::InvalidArgument { name: "text" })?;
  Ok(find_word_prefix(text, prefix, case))
}

#[cfg(test)]
mod test {
  use super::*;

  fn find(text: &str, prefix: &str) -> Option<usize> {
    find_word_prefix(text, Some(prefix), CaseMatching::Respect)
  }

  #[test]
  fn matches_at_word_start() {
    assert_eq!(find("bob smith", "smi"), Some(4));
    assert_eq!(find("bob smith", "bob"), Some(0));
    assert_eq!(find("bob smith", "bob smith"), Some(0));
    assert_eq!(find("bob smith", "b"), Some(0));
  }

  #[test]
  fn rejects_mid_word() {
    assert_eq!(find("bob smith", "mit"), None);
    assert_eq!(find("bob smith", "ob"), None);
    assert_eq!(find("foo1bar", "bar"), None);
  }

  #[test]
  fn punctuation_starts_a_word() {
    assert_eq!(find("jean-luc", "luc"), Some(5));
    assert_eq!(find("(555) 123", "555"), Some(1));
    assert_eq!(find("a_b", "b"), Some(2));
  }

  #[test]
  fn first_qualifying_match_wins() {
    assert_eq!(find("ann annie", "ann"), Some(0));
    assert_eq!(find("joann annie", "ann"), Some(6));
  }

  #[test]
  fn trims_leading_non_word_chars() {
    assert_eq!(trim_prefix("-smith"), "smith");
    assert_eq!(trim_prefix("  @@ab-c"), "ab-c");
    assert_eq!(trim_prefix("abc"), "abc");
    assert_eq!(trim_prefix("--"), "");
    assert_eq!(find("bob smith", "-smith"), Some(4));
  }

  #[test]
  fn trailing_punctuation_is_kept() {
    assert_eq!(find("bob smith", "smith."), None);
    assert_eq!(find("bob smith.", "smith."), Some(4));
  }

  #[test]
  fn empty_or_absent_prefix_never_matches() {
    assert_eq!(find("bob smith", ""), None);
    assert_eq!(find("bob smith", "--- "), None);
    assert_eq!(
      find_word_prefix("bob smith", None, CaseMatching::Respect),
      None
    );
    assert_eq!(find("", ""), None);
  }

  #[test]
  fn prefix_longer_than_text() {
    assert_eq!(find("bo", "bob"), None);
    assert_eq!(find("", "a"), None);
  }

  #[test]
  fn case_sensitive_by_default() {
    assert_eq!(find("Hello", "hello"), None);
    assert_eq!(find("Hello", "Hell"), Some(0));
  }

  #[test]
  fn ignore_case() {
    let find = |text, prefix| find_word_prefix(text, Some(prefix), CaseMatching::Ignore);
    assert_eq!(find("Hello", "hello"), Some(0));
    assert_eq!(find("bob SMITH", "smi"), Some(4));
    assert_eq!(find("ÉCOLE", "éc"), Some(0));
    assert_eq!(find("bob smith", "MIT"), None);
  }

  #[test]
  fn ignore_case_uses_single_char_mappings() {
    let find = |text, prefix| find_word_prefix(text, Some(prefix), CaseMatching::Ignore);
    assert_eq!(find("STRAßE", "straße"), Some(0));
    assert_eq!(find("straße", "STRASSE"), None);
    assert_eq!(find("ﬀ", "FF"), None);
    assert_eq!(find("Ǆ", "ǆ"), Some(0));
  }

  #[test]
  fn indices_are_chars_not_bytes() {
    assert_eq!(find("José Ávila", "Áv"), Some(5));
    assert_eq!(
      word_prefix_range("José Ávila", Some("Ávila"), CaseMatching::Respect),
      HighlightRange::new(5, 10)
    );
    assert_eq!(find("漢字 かな", "かな"), Some(3));
  }

  #[test]
  fn absent_text_is_invalid() {
    assert_eq!(
      try_find_word_prefix(None, Some("a"), CaseMatching::Respect),
      Err(HighlightError::InvalidArgument { name: "text" })
    );
    assert_eq!(
      try_find_word_prefix(Some("abc"), None, CaseMatching::Respect),
      Ok(None)
    );
    assert_eq!(
      try_find_word_prefix(Some("x abc"), Some("ab"), CaseMatching::Respect),
      Ok(Some(2))
    );
  }
}
