//! Color value types for LED buffers.

pub mod convert;

pub use convert::hsv2rgb_raw;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit RGB color.
///
/// Ordering compares channels lexicographically (red, then green, then
/// blue); the reprocess steps sort buffers by this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An HSV color with byte channels (hue 0-255, not degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    /// Create a color from channel values.
    pub fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}
