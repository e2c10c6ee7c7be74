//! Packed 24-bit ball color
//!
//! The value cycles through `[0, 0xFFFFFF)` one small step per frame, which
//! reads on screen as a continuous hue sweep.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::COLOR_MODULUS;

/// Color components with a fixed opaque alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// sRGB color packed as `0x00RRGGBB`. The high byte is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    /// Build a color, wrapping values outside `[0, 0xFFFFFF)`
    pub const fn new(rgb: u32) -> Self {
        Self(rgb % COLOR_MODULUS)
    }

    /// Uniformly random color in `[0, 0xFFFFFF)`
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(rng.random_range(0..COLOR_MODULUS))
    }

    /// Packed `0x00RRGGBB` value
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// Advance the packed value by `amount`, wrapping at `0xFFFFFF`
    pub fn shift(&mut self, amount: u32) {
        // u64 so that `amount` near u32::MAX can't overflow before the modulo
        self.0 = ((self.0 as u64 + amount as u64) % COLOR_MODULUS as u64) as u32;
    }

    /// Copy of this color shifted by `amount`
    #[must_use]
    pub fn shifted(mut self, amount: u32) -> Self {
        self.shift(amount);
        self
    }

    /// CSS fill style, `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0)
    }

    pub fn to_components(self) -> Rgba {
        Rgba {
            r: ((self.0 >> 16) & 0xFF) as u8,
            g: ((self.0 >> 8) & 0xFF) as u8,
            b: (self.0 & 0xFF) as u8,
            a: 0xFF,
        }
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Self::new(rgb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
