use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
  /// A required input was absent.
  #[error("invalid argument: `{name}` must be present")]
  InvalidArgument { name: &'static str },
}

pub type Result<T> = std::result::Result<T, HighlightError>;

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn invalid_argument_names_the_input() {
    let err = HighlightError::InvalidArgument { name: "mask" };
    assert_eq!(err.to_string(), "invalid argument: `mask` must be present");
  }
}
