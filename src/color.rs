//! Background color representation and hex parsing.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use palette::Srgb;

use crate::error::Error;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Built-in background used when neither the CLI nor the manifest
    /// provides one.
    pub const DEFAULT_BACKGROUND: Self = Self::new(0x4E, 0xCD, 0xC4);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

/// Parses `#RRGGBB`, `RRGGBB` or the short `#RGB` form.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self::from)
            .map_err(|source| Error::InvalidColor {
                value: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
