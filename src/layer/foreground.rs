//! Foreground layer: the source icon shrunk into the inner safe zone.

use super::{LayerEffect, LayerImage, LayerKind, place_centered, shrink_to_fit};
use crate::config::SafeZone;
use crate::icon::SourceImage;

/// Renders the source centered on a transparent canvas, scaled so that it
/// fits the inner safe zone and survives any launcher mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForegroundLayer {
    pub safe_zone: SafeZone,
}

impl ForegroundLayer {
    pub fn new(safe_zone: SafeZone) -> Self {
        Self { safe_zone }
    }
}

impl LayerEffect for ForegroundLayer {
    fn render(&self, source: &SourceImage, canvas_size: u32) -> LayerImage {
        build_foreground(source, canvas_size, self.safe_zone)
    }
}

/// Builds the foreground layer for a `canvas_size` square.
pub fn build_foreground(
    source: &SourceImage,
    canvas_size: u32,
    safe_zone: SafeZone,
) -> LayerImage {
    let bound = safe_zone.inner_bound(canvas_size);
    let shrunk = shrink_to_fit(source.data(), bound);
    let (canvas, placed) = place_centered(&shrunk, canvas_size);

    tracing::debug!(canvas_size, bound, ?placed, "Built foreground layer");
    LayerImage::new(LayerKind::Foreground, canvas)
}
