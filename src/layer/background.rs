//! Background layer: a solid fill inferred from the source corners.

use image::{RgbImage, Rgba};

use super::{LayerEffect, LayerImage, LayerKind};
use crate::color::Color;
use crate::icon::{CornerSamples, SourceImage};

// ============================================================================
// BackgroundChoice
// ============================================================================

/// How the background color is decided for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundChoice {
    /// Always use this color, skipping corner inference.
    Explicit(Color),
    /// Use the source's corner color when all four corners agree exactly,
    /// otherwise `fallback`.
    Inferred { fallback: Color },
}

impl BackgroundChoice {
    /// Resolves the fill color for `source`.
    pub fn resolve(&self, source: &SourceImage) -> Color {
        match *self {
            Self::Explicit(color) => color,
            Self::Inferred { fallback } => infer_background(source.corners(), fallback),
        }
    }
}

// ============================================================================
// BackgroundLayer
// ============================================================================

/// Renders an opaque, single-color layer.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundLayer {
    pub choice: BackgroundChoice,
}

impl BackgroundLayer {
    pub fn new(choice: BackgroundChoice) -> Self {
        Self { choice }
    }
}

impl LayerEffect for BackgroundLayer {
    fn render(&self, source: &SourceImage, canvas_size: u32) -> LayerImage {
        solid_background(self.choice.resolve(source), canvas_size)
    }
}

/// Builds the background layer, inferring the color from the source corners.
pub fn build_background(source: &SourceImage, canvas_size: u32, fallback: Color) -> LayerImage {
    solid_background(infer_background(source.corners(), fallback), canvas_size)
}

/// An opaque `canvas_size` square filled with `color`.
pub fn solid_background(color: Color, canvas_size: u32) -> LayerImage {
    LayerImage::new(
        LayerKind::Background,
        RgbImage::from_pixel(canvas_size, canvas_size, color.to_rgb()),
    )
}

// ============================================================================
// Corner Inference
// ============================================================================

/// Picks the background color from the four corner samples.
///
/// Matching is exact on the RGB channels: a single differing value in any
/// corner selects `fallback`. Alpha is ignored. Gray sources reach here
/// already expanded to RGBA, so a uniform gray border infers its gray.
/// Empty images have no corners and always fall back.
pub fn infer_background(corners: Option<&CornerSamples>, fallback: Color) -> Color {
    let rgb = |p: &Rgba<u8>| [p[0], p[1], p[2]];
    let inferred = corners.and_then(|corners| {
        let [first, rest @ ..] = &corners.pixels;
        rest.iter()
            .all(|p| rgb(p) == rgb(first))
            .then(|| Color::new(first[0], first[1], first[2]))
    });

    match inferred {
        Some(color) => {
            tracing::debug!(%color, "Inferred background from corner pixels");
            color
        }
        None => {
            tracing::debug!(%fallback, "Corner pixels disagree; using fallback background");
            fallback
        }
    }
}
