//! Character primitives shared by the highlighter crates.

pub mod chars;
