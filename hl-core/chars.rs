//! Character classification used to find word boundaries.
//!
//! "Letter" and "digit" follow the Unicode general category tables exactly:
//! letters are `Lu | Ll | Lt | Lm | Lo` and digits are `Nd` only. This is
//! narrower than [`char::is_alphanumeric`], which also accepts letter-like
//! numerics such as `Ⅻ` (`Nl`) and `½` (`No`).

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  Word,
  Whitespace,
  Punctuation,
  Unknown,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_letter_or_digit(c) => CharCategory::Word,
    c if c.is_whitespace() => CharCategory::Whitespace,
    c if char_is_punctuation(c) => CharCategory::Punctuation,
    _ => CharCategory::Unknown,
  }
}

#[inline]
pub fn char_is_letter(ch: char) -> bool {
  if ch.is_ascii() {
    return ch.is_ascii_alphabetic();
  }

  matches!(
    get_general_category(ch),
    GeneralCategory::UppercaseLetter
      | GeneralCategory::LowercaseLetter
      | GeneralCategory::TitlecaseLetter
      | GeneralCategory::ModifierLetter
      | GeneralCategory::OtherLetter
  )
}

#[inline]
pub fn char_is_digit(ch: char) -> bool {
  if ch.is_ascii() {
    return ch.is_ascii_digit();
  }

  get_general_category(ch) == GeneralCategory::DecimalNumber
}

#[inline]
pub fn char_is_letter_or_digit(ch: char) -> bool {
  char_is_letter(ch) || char_is_digit(ch)
}

#[inline]
pub fn char_is_punctuation(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
      | GeneralCategory::MathSymbol
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ModifierSymbol
  )
}

/// A word starts at a position whose preceding character is absent (start of
/// text) or is not a letter or digit.
#[inline]
pub fn is_word_boundary(prev: Option<char>) -> bool {
  !prev.is_some_and(char_is_letter_or_digit)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn ascii_letters_and_digits() {
    for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
      assert!(char_is_letter_or_digit(ch), "{ch:?}");
    }
    for ch in [' ', '-', '_', '.', '@', '\t', '\n'] {
      assert!(!char_is_letter_or_digit(ch), "{ch:?}");
    }
  }

  #[test]
  fn underscore_is_not_a_word_char() {
    assert_eq!(categorize_char('_'), CharCategory::Punctuation);
  }

  #[test]
  fn non_ascii_letters() {
    assert!(char_is_letter('é'));
    assert!(char_is_letter('д'));
    assert!(char_is_letter('漢'));
    assert!(char_is_letter('ǅ'));
    assert!(!char_is_digit('é'));
  }

  #[test]
  fn only_decimal_numbers_are_digits() {
    assert!(char_is_digit('٣'));
    assert!(char_is_digit('５'));
    assert!(!char_is_digit('Ⅻ'));
    assert!(!char_is_digit('½'));
    assert!(!char_is_letter_or_digit('²'));
  }

  #[test]
  fn categories() {
    assert_eq!(categorize_char('a'), CharCategory::Word);
    assert_eq!(categorize_char('7'), CharCategory::Word);
    assert_eq!(categorize_char(' '), CharCategory::Whitespace);
    assert_eq!(categorize_char('\u{3000}'), CharCategory::Whitespace);
    assert_eq!(categorize_char('-'), CharCategory::Punctuation);
    assert_eq!(categorize_char('+'), CharCategory::Punctuation);
    assert_eq!(categorize_char('😀'), CharCategory::Unknown);
  }

  #[test]
  fn word_boundaries() {
    assert!(is_word_boundary(None));
    assert!(is_word_boundary(Some(' ')));
    assert!(is_word_boundary(Some('-')));
    assert!(is_word_boundary(Some('(')));
    assert!(!is_word_boundary(Some('b')));
    assert!(!is_word_boundary(Some('9')));
  }
}
