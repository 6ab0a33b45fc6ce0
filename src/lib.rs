//! adaptive-icon-renderer: Android adaptive icon asset generation
//!
//! This crate turns a single raster icon into the foreground, background and
//! monochrome layers of an Android adaptive icon, at every mipmap density,
//! plus a flattened preview per density.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use adaptive_icon_renderer::{
//!     BackgroundChoice, Color, IconRenderer, OutputSet, RenderConfig, SourceImage,
//! };
//!
//! let source = SourceImage::open(Path::new("assets/images/icon.png"))?;
//! let renderer = IconRenderer::new(RenderConfig::default());
//! let output = OutputSet::new("assets/images", "android/app/src/main/res");
//!
//! // Corner color if all four corners agree, otherwise the fallback
//! let background = BackgroundChoice::Inferred { fallback: Color::DEFAULT_BACKGROUND };
//! let written = renderer.generate(&source, background, &output)?;
//! assert_eq!(written.len(), 3 + 5 * 4);
//! # Ok::<(), adaptive_icon_renderer::Error>(())
//! ```

mod color;
mod config;
mod density;
mod error;
mod icon;
mod layer;
mod output;
mod renderer;

pub use color::Color;
pub use config::{
    AdaptiveIconSection, AndroidSection, ExpoSection, ProjectManifest, RenderConfig, SafeZone,
    manifest_background,
};
pub use density::Density;
pub use error::{Error, Result};
pub use icon::{CornerSamples, RectPx, SizePx, SourceImage};
pub use layer::background::{build_background, infer_background, solid_background};
pub use layer::foreground::build_foreground;
pub use layer::monochrome::{build_monochrome, enhance_contrast, to_luma_alpha};
pub use layer::{
    BackgroundChoice, BackgroundLayer, ForegroundLayer, LayerEffect, LayerImage, LayerKind,
    MonochromeLayer, RESAMPLE_FILTER, composite_over, place_centered, shrink_to_fit,
};
pub use output::{OutputSet, PREVIEW_FILE_NAME};
pub use renderer::{BaseLayers, DensityLayers, IconRenderer, flatten_preview};
