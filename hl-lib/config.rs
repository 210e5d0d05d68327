//! Highlighter configuration.
//!
//! ```toml
//! color      = "#33b5e5"   # palette name, "#rrggbb", ANSI index, or 0xAARRGGBB integer
//! modifiers  = ["bold"]
//! case       = "respect"   # or "ignore"
//! mask-spans = "per-char"  # or "coalesced"
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::{
  mask::MaskSpans,
  prefix::CaseMatching,
  style::{
    Color,
    Modifier,
    Style,
  },
};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse highlighter config: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("{0}")]
  InvalidColor(String),
  #[error("{0}")]
  InvalidModifier(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlighterConfig {
  pub color:      Color,
  pub modifiers:  Modifier,
  pub case:       CaseMatching,
  pub mask_spans: MaskSpans,
}

impl Default for HighlighterConfig {
  fn default() -> Self {
    Self {
      color:      Color::Cyan,
      modifiers:  Modifier::empty(),
      case:       CaseMatching::default(),
      mask_spans: MaskSpans::default(),
    }
  }
}

impl HighlighterConfig {
  pub fn new(color: Color) -> Self {
    Self {
      color,
      ..Default::default()
    }
  }

  pub fn with_case(mut self, case: CaseMatching) -> Self {
    self.case = case;
    self
  }

  pub fn with_mask_spans(mut self, mask_spans: MaskSpans) -> Self {
    self.mask_spans = mask_spans;
    self
  }

  pub fn with_modifier(mut self, modifier: Modifier) -> Self {
    self.modifiers.insert(modifier);
    self
  }

  /// The style token highlighted ranges are painted with.
  pub fn style(&self) -> Style {
    Style::new().fg(self.color).add_modifier(self.modifiers)
  }

  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    let raw: RawConfig = toml::from_str(s)?;
    Self::try_from(raw)
  }

  /// Parses `s`, falling back to the default configuration on error.
  pub fn from_toml_str_or_default(s: &str) -> Self {
    Self::from_toml_str(s).unwrap_or_else(|err| {
      tracing::warn!("{err}, using default highlighter config");
      Self::default()
    })
  }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorValue {
  Packed(u32),
  Named(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawConfig {
  color:      Option<ColorValue>,
  modifiers:  Vec<String>,
  case:       CaseMatching,
  mask_spans: MaskSpans,
}

impl TryFrom<RawConfig> for HighlighterConfig {
  type Error = ConfigError;

  fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
    let color = match raw.color {
      None => HighlighterConfig::default().color,
      Some(ColorValue::Packed(argb)) => Color::from_argb(argb),
      Some(ColorValue::Named(name)) => name.parse().map_err(ConfigError::InvalidColor)?,
    };

    let modifiers = raw
      .modifiers
      .iter()
      .map(|modifier| modifier.parse::<Modifier>())
      .try_fold(Modifier::empty(), |acc, modifier| {
        modifier.map(|modifier| acc | modifier)
      })
      .map_err(ConfigError::InvalidModifier)?;

    Ok(Self {
      color,
      modifiers,
      case: raw.case,
      mask_spans: raw.mask_spans,
    })
  }
}
