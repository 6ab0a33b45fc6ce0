//! Android mipmap density buckets.

use std::fmt;

/// A screen density bucket with its scale relative to mdpi.
///
/// Variants are declared from the smallest to the largest multiplier, and
/// [`Density::ALL`] keeps that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// The bucket qualifier used in resource directory names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    pub fn multiplier(self) -> f32 {
        match self {
            Self::Mdpi => 1.0,
            Self::Hdpi => 1.5,
            Self::Xhdpi => 2.0,
            Self::Xxhdpi => 3.0,
            Self::Xxxhdpi => 4.0,
        }
    }

    /// Side length in pixels of a square `units` wide at this density.
    pub fn pixel_size(self, units: u32) -> u32 {
        (units as f32 * self.multiplier()).floor() as u32
    }

    /// Resource directory name, e.g. `mipmap-xhdpi`.
    pub fn mipmap_dir(self) -> String {
        format!("mipmap-{}", self.name())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
