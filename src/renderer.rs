//! Adaptive icon rendering: base layers and per-density expansion.

use std::path::PathBuf;

use image::{DynamicImage, RgbImage};

use crate::config::RenderConfig;
use crate::density::Density;
use crate::error::Result;
use crate::icon::SourceImage;
use crate::layer::{
    BackgroundChoice, BackgroundLayer, ForegroundLayer, LayerEffect, LayerImage, LayerKind,
    MonochromeLayer, composite_over,
};
use crate::output::OutputSet;

// ============================================================================
// Rendered Sets
// ============================================================================

/// The three layers at the base (largest) size.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayers {
    pub foreground: LayerImage,
    pub background: LayerImage,
    pub monochrome: LayerImage,
}

impl BaseLayers {
    pub fn get(&self, kind: LayerKind) -> &LayerImage {
        match kind {
            LayerKind::Foreground => &self.foreground,
            LayerKind::Background => &self.background,
            LayerKind::Monochrome => &self.monochrome,
        }
    }

    /// Layers in [`LayerKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerImage> {
        LayerKind::ALL.into_iter().map(|kind| self.get(kind))
    }

    /// Resamples every layer to `size` pixels.
    pub fn resized(&self, size: u32) -> Self {
        Self {
            foreground: self.foreground.resized(size),
            background: self.background.resized(size),
            monochrome: self.monochrome.resized(size),
        }
    }
}

/// The layers and flattened preview for one density.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityLayers {
    pub density: Density,
    pub layers: BaseLayers,
    /// Foreground over background, for display only. Launchers compose the
    /// real icon from the separate layers.
    pub preview: RgbImage,
}

impl DensityLayers {
    pub fn size(&self) -> u32 {
        self.preview.width()
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders every adaptive icon layer for one source image.
///
/// # Example
///
/// ```
/// use adaptive_icon_renderer::{BackgroundChoice, Color, IconRenderer, RenderConfig, SourceImage};
/// use image::{Rgba, RgbaImage};
///
/// let source = SourceImage::from_rgba(RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255])));
/// let renderer = IconRenderer::new(RenderConfig::default());
///
/// let base = renderer.render_base(&source, BackgroundChoice::Inferred {
///     fallback: Color::DEFAULT_BACKGROUND,
/// });
/// let densities = renderer.expand(&base);
///
/// assert_eq!(base.foreground.size(), 432);
/// assert_eq!(densities.len(), 5);
/// assert_eq!(densities[0].size(), 108);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    config: RenderConfig,
}

impl IconRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the three layers at `size` pixels.
    pub fn render_layers(
        &self,
        source: &SourceImage,
        background: BackgroundChoice,
        size: u32,
    ) -> BaseLayers {
        let foreground = ForegroundLayer::new(self.config.safe_zone);
        let monochrome =
            MonochromeLayer::new(self.config.safe_zone, self.config.monochrome_contrast);

        BaseLayers {
            foreground: foreground.render(source, size),
            background: BackgroundLayer::new(background).render(source, size),
            monochrome: monochrome.render(source, size),
        }
    }

    /// Renders the three layers at the base size.
    pub fn render_base(&self, source: &SourceImage, background: BackgroundChoice) -> BaseLayers {
        let size = self.config.base_size();
        tracing::info!(size, "Generating base icons");
        self.render_layers(source, background, size)
    }

    /// Downscales the base layers to every configured density, smallest first.
    pub fn expand(&self, base: &BaseLayers) -> Vec<DensityLayers> {
        self.sorted_densities()
            .into_iter()
            .map(|density| self.expand_one(base, density))
            .collect()
    }

    /// Renders and writes every asset, stopping at the first write failure.
    ///
    /// Returns the paths written, base assets first.
    pub fn generate(
        &self,
        source: &SourceImage,
        background: BackgroundChoice,
        output: &OutputSet,
    ) -> Result<Vec<PathBuf>> {
        let base = self.render_base(source, background);
        let mut written = output.write_base(&base)?;

        for density in self.sorted_densities() {
            let set = self.expand_one(&base, density);
            written.extend(output.write_density(&set)?);
        }
        Ok(written)
    }

    fn sorted_densities(&self) -> Vec<Density> {
        let mut densities = self.config.densities.clone();
        densities.sort();
        densities.dedup();
        densities
    }

    /// Downscales the base layers to `density` and builds its preview.
    pub fn expand_one(&self, base: &BaseLayers, density: Density) -> DensityLayers {
        let size = self.config.layer_size(density);
        tracing::info!(%density, size, "Generating density icons");

        let layers = base.resized(size);
        let preview = flatten_preview(&layers.foreground, &layers.background);
        DensityLayers {
            density,
            layers,
            preview,
        }
    }
}

/// Composites `foreground` over `background` into an opaque image.
pub fn flatten_preview(foreground: &LayerImage, background: &LayerImage) -> RgbImage {
    let mut canvas = background.data.to_rgba8();
    composite_over(&mut canvas, &foreground.data.to_rgba8(), 0, 0);
    DynamicImage::ImageRgba8(canvas).into_rgb8()
}
