//! Source image and geometry types.
//!
//! A [`SourceImage`] is the decoded input normalized to RGBA, along with its
//! four corner pixels for background inference.

use std::path::Path;

use image::{DynamicImage, ImageReader, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// A rectangle defined in pixel coordinates.
///
/// Used for the placement of shrunk content on a layer canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the canvas
    pub x: u32,
    /// Y offset from the top edge of the canvas
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Centers a `size` rectangle on a square canvas, flooring the offsets.
    ///
    /// Content larger than the canvas is pinned to the origin.
    pub fn centered(size: SizePx, canvas: u32) -> Self {
        Self {
            x: canvas.saturating_sub(size.width) / 2,
            y: canvas.saturating_sub(size.height) / 2,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shrinks to fit inside a `bound` square, keeping the aspect ratio.
    ///
    /// Sizes already within the bound are returned unchanged. The scaled
    /// side is rounded to nearest and never drops below one pixel.
    pub fn fit_within(self, bound: u32) -> Self {
        let bound = bound.max(1);
        if self.width <= bound && self.height <= bound {
            return self;
        }
        let scale = |side: u32, longest: u32| -> u32 {
            let scaled = (u64::from(side) * u64::from(bound) + u64::from(longest) / 2)
                / u64::from(longest);
            (scaled as u32).clamp(1, bound)
        };
        if self.width >= self.height {
            Self::new(bound, scale(self.height, self.width))
        } else {
            Self::new(scale(self.width, self.height), bound)
        }
    }
}

// ============================================================================
// Corner Samples
// ============================================================================

/// The four corner pixels of the normalized RGBA image, in the order
/// top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerSamples {
    pub pixels: [Rgba<u8>; 4],
}

impl CornerSamples {
    /// Samples the corners of `image`, or `None` when it has no pixels.
    pub fn sample(image: &RgbaImage) -> Option<Self> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return None;
        }
        let (right, bottom) = (w - 1, h - 1);
        Some(Self {
            pixels: [
                *image.get_pixel(0, 0),
                *image.get_pixel(right, 0),
                *image.get_pixel(0, bottom),
                *image.get_pixel(right, bottom),
            ],
        })
    }
}

// ============================================================================
// SourceImage
// ============================================================================

/// The decoded source icon.
///
/// The pixel data is always RGBA; images decoded without alpha become fully
/// opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    data: RgbaImage,
    corners: Option<CornerSamples>,
}

impl SourceImage {
    /// Normalizes a decoded image to RGBA and samples its corners.
    ///
    /// Multi-frame formats only contribute their first frame.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let data = image.into_rgba8();
        let corners = CornerSamples::sample(&data);
        Self { data, corners }
    }

    /// Wraps an RGBA buffer that already carries alpha.
    pub fn from_rgba(data: RgbaImage) -> Self {
        Self::from_dynamic(DynamicImage::ImageRgba8(data))
    }

    /// Opens and decodes the image at `path`, guessing the format from its
    /// contents.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        let decode_err = |source| Error::Decode {
            path: path.to_path_buf(),
            source,
        };
        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "Loaded source icon"
        );
        Ok(Self::from_dynamic(image))
    }

    pub fn data(&self) -> &RgbaImage {
        &self.data
    }

    /// Corner samples; `None` for an empty image.
    pub fn corners(&self) -> Option<&CornerSamples> {
        self.corners.as_ref()
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }
}
