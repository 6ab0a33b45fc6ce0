//! Adaptive icon layers.
//!
//! Each layer builder implements [`LayerEffect`], turning a [`SourceImage`]
//! into a square [`LayerImage`] of the requested canvas size. Builders are
//! pure: the same source and canvas size always produce the same pixels, so
//! the base layers can be rendered once and downscaled per density.
//!
//! ```text
//!             SourceImage
//!       ┌──────────┼───────────┐
//!       ▼          ▼           ▼
//! ┌────────────┐ ┌────────────┐ ┌────────────┐
//! │ Foreground │ │ Background │ │ Monochrome │
//! └─────┬──────┘ └─────┬──────┘ └─────┬──────┘
//!       └──────────────┼──────────────┘
//!                      ▼
//!               resize per density
//! ```

pub mod background;
pub mod foreground;
pub mod monochrome;

pub use background::{BackgroundChoice, BackgroundLayer};
pub use foreground::ForegroundLayer;
pub use monochrome::MonochromeLayer;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::icon::{RectPx, SizePx, SourceImage};

/// Resampling filter used for every shrink and density resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

// ============================================================================
// LayerKind
// ============================================================================

/// The three layers of an adaptive icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Foreground,
    Background,
    Monochrome,
}

impl LayerKind {
    /// Every layer, in the order they are rendered and written.
    pub const ALL: [LayerKind; 3] = [
        LayerKind::Foreground,
        LayerKind::Background,
        LayerKind::Monochrome,
    ];

    /// File name of the base-size asset.
    pub fn asset_file_name(self) -> &'static str {
        match self {
            Self::Foreground => "android-icon-foreground.png",
            Self::Background => "android-icon-background.png",
            Self::Monochrome => "android-icon-monochrome.png",
        }
    }

    /// File name inside a `mipmap-*` resource directory.
    pub fn mipmap_file_name(self) -> &'static str {
        match self {
            Self::Foreground => "ic_launcher_foreground.png",
            Self::Background => "ic_launcher_background.png",
            Self::Monochrome => "ic_launcher_monochrome.png",
        }
    }
}

// ============================================================================
// LayerImage
// ============================================================================

/// A rendered square layer.
///
/// Background layers hold opaque RGB data; the others hold RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerImage {
    pub kind: LayerKind,
    pub data: DynamicImage,
}

impl LayerImage {
    pub fn new(kind: LayerKind, data: impl Into<DynamicImage>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Returns a copy resampled to `size`×`size`, keeping the pixel format.
    pub fn resized(&self, size: u32) -> Self {
        Self {
            kind: self.kind,
            data: self.data.resize_exact(size, size, RESAMPLE_FILTER),
        }
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A builder that renders one adaptive icon layer from the source image.
pub trait LayerEffect {
    /// Renders the layer on a `canvas_size` square canvas.
    fn render(&self, source: &SourceImage, canvas_size: u32) -> LayerImage;
}

// ============================================================================
// Placement
// ============================================================================

/// Shrinks `image` to fit a `bound` square, never upscaling.
pub fn shrink_to_fit(image: &RgbaImage, bound: u32) -> RgbaImage {
    let size = SizePx::new(image.width(), image.height());
    let fitted = size.fit_within(bound);
    if fitted == size {
        return image.clone();
    }
    imageops::resize(image, fitted.width, fitted.height, RESAMPLE_FILTER)
}

/// Pastes `content` centered on a transparent `canvas_size` square.
///
/// Returns the canvas and where the content landed.
pub fn place_centered(content: &RgbaImage, canvas_size: u32) -> (RgbaImage, RectPx) {
    let rect = RectPx::centered(
        SizePx::new(content.width(), content.height()),
        canvas_size,
    );
    let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, Rgba([0, 0, 0, 0]));
    composite_over(&mut canvas, content, rect.x as i32, rect.y as i32);
    (canvas, rect)
}

// ============================================================================
// Compositing
// ============================================================================

/// Composites a source image onto a destination image at the specified position.
///
/// Uses standard alpha blending (source over destination).
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dx = x + sx as i32;
        let dy = y + sy as i32;
        if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
            continue;
        }

        let dst_pixel = dest.get_pixel(dx as u32, dy as u32);
        let blended = alpha_blend(*src_pixel, *dst_pixel);
        dest.put_pixel(dx as u32, dy as u32, blended);
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let blend = |s: u8, d: u8| -> u8 {
        let out = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        out.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn composite_opaque_overwrites() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));

        composite_over(&mut dest, &src, 3, 3);

        assert_eq!(dest.get_pixel(5, 5).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(dest.get_pixel(7, 7).0, [255, 0, 0, 255]);
    }

    #[test]
    fn composite_respects_source_alpha() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let mut src = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 128]));
        src.put_pixel(1, 1, Rgba([0, 255, 0, 0]));

        composite_over(&mut dest, &src, 0, 0);

        let half = dest.get_pixel(0, 0);
        assert!(half[0] > 0 && half[2] > 0, "expected a blend, got {half:?}");
        assert_eq!(half[3], 255);
        // Fully transparent source pixels leave the destination untouched.
        assert_eq!(dest.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn composite_clips_out_of_bounds() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));

        composite_over(&mut dest, &src, -2, 2);

        assert_eq!(dest.get_pixel(1, 3).0, [9, 9, 9, 255]);
        assert_eq!(dest.get_pixel(2, 2).0, [0, 0, 0, 0]);
        assert_eq!(dest.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn shrink_to_fit_keeps_small_images() {
        let img = RgbaImage::from_pixel(40, 20, Rgba([1, 2, 3, 255]));
        assert_eq!(shrink_to_fit(&img, 264), img);
    }

    #[test]
    fn shrink_to_fit_preserves_aspect() {
        let img = RgbaImage::from_pixel(600, 300, Rgba([1, 2, 3, 255]));
        let shrunk = shrink_to_fit(&img, 264);
        assert_eq!(shrunk.dimensions(), (264, 132));
    }

    #[test]
    fn place_centered_offsets() {
        let content = RgbaImage::from_pixel(264, 264, Rgba([255, 0, 0, 255]));
        let (canvas, rect) = place_centered(&content, 432);

        assert_eq!(rect, RectPx::new(84, 84, 264, 264));
        assert_eq!(canvas.get_pixel(83, 83).0, [0, 0, 0, 0]);
        assert_eq!(canvas.get_pixel(84, 84).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(347, 347).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(348, 348).0, [0, 0, 0, 0]);
    }

    #[test]
    fn resized_keeps_kind_and_format() {
        let layer = LayerImage::new(
            LayerKind::Background,
            RgbImage::from_pixel(432, 432, image::Rgb([17, 34, 51])),
        );
        let small = layer.resized(108);

        assert_eq!(small.kind, LayerKind::Background);
        assert_eq!(small.size(), 108);
        assert!(small.data.as_rgb8().is_some());
        assert_eq!(small.data.as_rgb8().unwrap().get_pixel(50, 50).0, [17, 34, 51]);
    }

    #[test]
    fn file_names_are_distinct() {
        let assets: std::collections::HashSet<_> =
            LayerKind::ALL.iter().map(|k| k.asset_file_name()).collect();
        let mipmaps: std::collections::HashSet<_> =
            LayerKind::ALL.iter().map(|k| k.mipmap_file_name()).collect();
        assert_eq!(assets.len(), 3);
        assert_eq!(mipmaps.len(), 3);
    }
}
