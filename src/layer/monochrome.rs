//! Monochrome layer used by themed icons.

use image::{DynamicImage, GrayAlphaImage, LumaA, RgbaImage};

use super::{LayerEffect, LayerImage, LayerKind, place_centered, shrink_to_fit};
use crate::config::SafeZone;
use crate::icon::SourceImage;

/// Renders a contrast-enhanced grayscale copy of the source, placed exactly
/// like the foreground.
#[derive(Debug, Clone, Copy)]
pub struct MonochromeLayer {
    pub safe_zone: SafeZone,
    /// Contrast factor; 1.0 leaves luminance unchanged.
    pub contrast: f32,
}

impl MonochromeLayer {
    pub fn new(safe_zone: SafeZone, contrast: f32) -> Self {
        Self {
            safe_zone,
            contrast,
        }
    }
}

impl Default for MonochromeLayer {
    fn default() -> Self {
        Self::new(SafeZone::ANDROID, 1.2)
    }
}

impl LayerEffect for MonochromeLayer {
    fn render(&self, source: &SourceImage, canvas_size: u32) -> LayerImage {
        build_monochrome(source, canvas_size, self.safe_zone, self.contrast)
    }
}

/// Builds the monochrome layer for a `canvas_size` square.
///
/// The alpha of the source survives the grayscale conversion, so only the
/// icon's own shape is painted.
pub fn build_monochrome(
    source: &SourceImage,
    canvas_size: u32,
    safe_zone: SafeZone,
    contrast: f32,
) -> LayerImage {
    let bound = safe_zone.inner_bound(canvas_size);
    let shrunk = shrink_to_fit(source.data(), bound);

    let mut gray = to_luma_alpha(&shrunk);
    let mean = enhance_contrast(&mut gray, contrast);
    let gray = DynamicImage::ImageLumaA8(gray).to_rgba8();
    let (canvas, placed) = place_centered(&gray, canvas_size);

    tracing::debug!(canvas_size, bound, mean, contrast, ?placed, "Built monochrome layer");
    LayerImage::new(LayerKind::Monochrome, canvas)
}

/// Converts to gray with ITU-R 601-2 luma weights, keeping alpha.
///
/// `L = (299 R + 587 G + 114 B) / 1000`, rounded to nearest.
pub fn to_luma_alpha(image: &RgbaImage) -> GrayAlphaImage {
    GrayAlphaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
        LumaA([((weighted + 500) / 1000) as u8, a])
    })
}

/// Stretches luminance away from the image mean by `factor`.
///
/// The mean covers every pixel, transparent ones included, and is rounded to
/// the nearest integer. Returns the mean used.
pub fn enhance_contrast(image: &mut GrayAlphaImage, factor: f32) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }
    let total: u64 = image.pixels().map(|p| u64::from(p[0])).sum();
    let mean = ((total + count / 2) / count) as u8;

    let m = f32::from(mean);
    for pixel in image.pixels_mut() {
        let v = m + factor * (f32::from(pixel[0]) - m);
        pixel[0] = v.round().clamp(0.0, 255.0) as u8;
    }
    mean
}
