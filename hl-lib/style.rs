//! The style token highlighted ranges are painted with.
//!
//! Colours are written the way theme files write them: a palette name
//! (`"red"`, `"light-blue"`), a `#rrggbb` hex code, or an ANSI index.

use std::str::FromStr;

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
  Reset,
  Black,
  Red,
  Green,
  Yellow,
  Blue,
  Magenta,
  Cyan,
  Gray,
  LightRed,
  LightGreen,
  LightYellow,
  LightBlue,
  LightMagenta,
  LightCyan,
  LightGray,
  White,
  Rgb(u8, u8, u8),
  Indexed(u8),
}

const PALETTE: &[(&str, Color)] = &[
  ("default", Color::Reset),
  ("black", Color::Black),
  ("red", Color::Red),
  ("green", Color::Green),
  ("yellow", Color::Yellow),
  ("blue", Color::Blue),
  ("magenta", Color::Magenta),
  ("cyan", Color::Cyan),
  ("gray", Color::Gray),
  ("light-red", Color::LightRed),
  ("light-green", Color::LightGreen),
  ("light-yellow", Color::LightYellow),
  ("light-blue", Color::LightBlue),
  ("light-magenta", Color::LightMagenta),
  ("light-cyan", Color::LightCyan),
  ("light-gray", Color::LightGray),
  ("white", Color::White),
];

impl Color {
  /// Convert a packed `0xAARRGGBB` colour integer. Alpha is dropped.
  pub const fn from_argb(argb: u32) -> Self {
    let [_, r, g, b] = argb.to_be_bytes();
    Color::Rgb(r, g, b)
  }

  fn from_palette(s: &str) -> Option<Self> {
    PALETTE
      .iter()
      .find_map(|(name, color)| (*name == s).then_some(*color))
  }

  fn from_hex(s: &str) -> Result<Self, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() == 6 && hex.is_ascii() {
      if let (Ok(red), Ok(green), Ok(blue)) = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
      ) {
        return Ok(Color::Rgb(red, green, blue));
      }
    }

    Err(format!("Malformed hexcode: {s}"))
  }
}

impl FromStr for Color {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some(color) = Self::from_palette(s) {
      return Ok(color);
    }
    if s.starts_with('#') {
      return Self::from_hex(s);
    }
    s.parse::<u8>()
      .map(Color::Indexed)
      .map_err(|_| format!("Unrecognized color: {s}"))
  }
}

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct Modifier: u16 {
    const BOLD        = 0b0000_0000_0001;
    const DIM         = 0b0000_0000_0010;
    const ITALIC      = 0b0000_0000_0100;
    const UNDERLINED  = 0b0000_0000_1000;
    const REVERSED    = 0b0000_0001_0000;
    const CROSSED_OUT = 0b0000_0010_0000;
  }
}

impl FromStr for Modifier {
  type Err = String;

  fn from_str(modifier: &str) -> Result<Self, Self::Err> {
    match modifier {
      "bold" => Ok(Self::BOLD),
      "dim" => Ok(Self::DIM),
      "italic" => Ok(Self::ITALIC),
      "underlined" => Ok(Self::UNDERLINED),
      "reversed" => Ok(Self::REVERSED),
      "crossed_out" => Ok(Self::CROSSED_OUT),
      _ => Err(format!("Invalid modifier: {modifier}")),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
  pub fg:        Option<Color>,
  pub bg:        Option<Color>,
  pub modifiers: Modifier,
}

impl Default for Style {
  fn default() -> Self {
    Self::new()
  }
}

impl Style {
  pub const fn new() -> Self {
    Self {
      fg:        None,
      bg:        None,
      modifiers: Modifier::empty(),
    }
  }

  pub const fn fg(mut self, color: Color) -> Self {
    self.fg = Some(color);
    self
  }

  pub const fn bg(mut self, color: Color) -> Self {
    self.bg = Some(color);
    self
  }

  pub fn add_modifier(mut self, modifier: Modifier) -> Self {
    self.modifiers.insert(modifier);
    self
  }
}
