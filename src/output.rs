//! Writing rendered layers to disk.
//!
//! Layout:
//!
//! ```text
//! <assets_dir>/android-icon-{foreground,background,monochrome}.png
//! <res_dir>/mipmap-<density>/ic_launcher{,_foreground,_background,_monochrome}.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat};

use crate::density::Density;
use crate::error::{Error, Result};
use crate::layer::LayerKind;
use crate::renderer::{BaseLayers, DensityLayers};

/// File name of the flattened preview in each mipmap directory.
pub const PREVIEW_FILE_NAME: &str = "ic_launcher.png";

/// Destination directories for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSet {
    /// Receives the three base-size assets.
    pub assets_dir: PathBuf,
    /// Android `res` directory receiving one `mipmap-*` directory per density.
    pub res_dir: PathBuf,
}

impl OutputSet {
    pub fn new(assets_dir: impl Into<PathBuf>, res_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            res_dir: res_dir.into(),
        }
    }

    pub fn asset_path(&self, kind: LayerKind) -> PathBuf {
        self.assets_dir.join(kind.asset_file_name())
    }

    pub fn density_dir(&self, density: Density) -> PathBuf {
        self.res_dir.join(density.mipmap_dir())
    }

    pub fn mipmap_path(&self, density: Density, kind: LayerKind) -> PathBuf {
        self.density_dir(density).join(kind.mipmap_file_name())
    }

    pub fn preview_path(&self, density: Density) -> PathBuf {
        self.density_dir(density).join(PREVIEW_FILE_NAME)
    }

    /// Writes the base assets, returning the written paths.
    pub fn write_base(&self, base: &BaseLayers) -> Result<Vec<PathBuf>> {
        create_dir(&self.assets_dir)?;
        let written = base
            .iter()
            .map(|layer| {
                let path = self.asset_path(layer.kind);
                write_png(&layer.data, &path).map(|()| path)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(dir = %self.assets_dir.display(), "Saved base icons");
        Ok(written)
    }

    /// Writes one density's three layers and preview, returning the written
    /// paths.
    pub fn write_density(&self, set: &DensityLayers) -> Result<Vec<PathBuf>> {
        let dir = self.density_dir(set.density);
        create_dir(&dir)?;

        let mut written = Vec::with_capacity(4);
        for layer in set.layers.iter() {
            let path = self.mipmap_path(set.density, layer.kind);
            write_png(&layer.data, &path)?;
            written.push(path);
        }

        let preview_path = self.preview_path(set.density);
        write_png(&DynamicImage::ImageRgb8(set.preview.clone()), &preview_path)?;
        written.push(preview_path);

        tracing::info!(density = %set.density, dir = %dir.display(), "Saved density icons");
        Ok(written)
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::Write {
        path: dir.to_path_buf(),
        source: ImageError::IoError(e),
    })
}

fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "Wrote PNG");
    Ok(())
}
