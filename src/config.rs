//! Render configuration and project manifest loading.
//!
//! [`RenderConfig`] holds the fixed geometry and density table and is built
//! once per run. The background color default can come from an Expo-style
//! `app.json` manifest:
//!
//! ```json
//! {
//!   "expo": {
//!     "android": {
//!       "adaptiveIcon": { "backgroundColor": "#4ECDC4" }
//!     }
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::density::Density;
use crate::error::{Error, Result};

// ============================================================================
// SafeZone
// ============================================================================

/// Adaptive icon geometry in density-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeZone {
    /// Full layer size (108 units for Android).
    pub outer: u32,
    /// Area guaranteed to survive every launcher mask (66 units).
    pub inner: u32,
}

impl SafeZone {
    pub const ANDROID: Self = Self {
        outer: 108,
        inner: 66,
    };

    /// Largest side, in pixels, content may occupy on a `canvas_size` layer.
    pub fn inner_bound(&self, canvas_size: u32) -> u32 {
        (u64::from(canvas_size) * u64::from(self.inner) / u64::from(self.outer)) as u32
    }
}

impl Default for SafeZone {
    fn default() -> Self {
        Self::ANDROID
    }
}

// ============================================================================
// RenderConfig
// ============================================================================

/// Immutable settings shared by every layer builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub safe_zone: SafeZone,
    /// Densities to emit, smallest first.
    pub densities: Vec<Density>,
    /// Color used when nothing else supplies one.
    pub default_background: Color,
    /// Contrast factor applied to the monochrome layer.
    pub monochrome_contrast: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            safe_zone: SafeZone::ANDROID,
            densities: Density::ALL.to_vec(),
            default_background: Color::DEFAULT_BACKGROUND,
            monochrome_contrast: 1.2,
        }
    }
}

impl RenderConfig {
    /// Pixel size of the base layers: the safe zone at the largest density.
    pub fn base_size(&self) -> u32 {
        let largest = self
            .densities
            .iter()
            .copied()
            .max()
            .unwrap_or(Density::Xxxhdpi);
        largest.pixel_size(self.safe_zone.outer)
    }

    /// Pixel size of one layer at `density`.
    pub fn layer_size(&self, density: Density) -> u32 {
        density.pixel_size(self.safe_zone.outer)
    }
}

// ============================================================================
// Project Manifest
// ============================================================================

/// The subset of an Expo `app.json` this crate reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expo: Option<ExpoSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpoSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_icon: Option<AdaptiveIconSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveIconSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl ProjectManifest {
    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::ConfigUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|e| Error::ConfigUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The raw `expo.android.adaptiveIcon.backgroundColor` value, if set.
    pub fn background_color(&self) -> Option<&str> {
        self.expo
            .as_ref()?
            .android
            .as_ref()?
            .adaptive_icon
            .as_ref()?
            .background_color
            .as_deref()
    }
}

/// Resolves the fallback background color from the manifest at `path`.
///
/// Never fails: a missing, unreadable or malformed manifest, an absent key,
/// or an invalid color string all yield `default` and log a warning.
pub fn manifest_background(path: &Path, default: Color) -> Color {
    match load_manifest_color(path) {
        Ok(Some(color)) => {
            tracing::debug!(%color, path = %path.display(), "Background color from manifest");
            color
        }
        Ok(None) => {
            tracing::debug!(
                path = %path.display(),
                %default,
                "Manifest has no adaptive icon background; using default"
            );
            default
        }
        Err(e) => {
            tracing::warn!(error = %e, %default, "Could not load manifest; using default color");
            default
        }
    }
}

fn load_manifest_color(path: &Path) -> Result<Option<Color>> {
    let manifest = ProjectManifest::load(path)?;
    manifest
        .background_color()
        .map(|raw| {
            raw.parse::<Color>().map_err(|e| Error::ConfigUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_bound_for_base_size() {
        assert_eq!(SafeZone::ANDROID.inner_bound(432), 264);
        assert_eq!(SafeZone::ANDROID.inner_bound(108), 66);
        assert_eq!(SafeZone::ANDROID.inner_bound(100), 61);
    }

    #[test]
    fn default_config_base_size() {
        let config = RenderConfig::default();
        assert_eq!(config.base_size(), 432);
        assert_eq!(config.layer_size(Density::Hdpi), 162);
        assert_eq!(config.densities.len(), 5);
    }

    #[test]
    fn manifest_reads_nested_background() {
        let json = r##"{
            "expo": {
                "name": "app",
                "android": { "adaptiveIcon": { "backgroundColor": "#112233" } }
            }
        }"##;
        let manifest = ProjectManifest::from_json(json).unwrap();
        assert_eq!(manifest.background_color(), Some("#112233"));
    }

    #[test]
    fn manifest_without_adaptive_icon() {
        let manifest = ProjectManifest::from_json(r#"{ "expo": { "android": {} } }"#).unwrap();
        assert!(manifest.background_color().is_none());

        let empty = ProjectManifest::from_json("{}").unwrap();
        assert!(empty.background_color().is_none());
    }

    #[test]
    fn missing_manifest_is_config_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectManifest::load(&dir.path().join("app.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigUnavailable { .. }));
    }

    #[test]
    fn manifest_background_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");

        // Missing file
        assert_eq!(
            manifest_background(&path, Color::DEFAULT_BACKGROUND),
            Color::DEFAULT_BACKGROUND
        );

        // Malformed JSON
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(
            manifest_background(&path, Color::DEFAULT_BACKGROUND),
            Color::DEFAULT_BACKGROUND
        );

        // Invalid color value
        fs::write(
            &path,
            r#"{"expo":{"android":{"adaptiveIcon":{"backgroundColor":"teal"}}}}"#,
        )
        .unwrap();
        assert_eq!(
            manifest_background(&path, Color::DEFAULT_BACKGROUND),
            Color::DEFAULT_BACKGROUND
        );
    }

    #[test]
    fn manifest_background_uses_configured_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        fs::write(
            &path,
            r##"{"expo":{"android":{"adaptiveIcon":{"backgroundColor":"#FF8800"}}}}"##,
        )
        .unwrap();

        assert_eq!(
            manifest_background(&path, Color::DEFAULT_BACKGROUND),
            Color::new(0xFF, 0x88, 0x00)
        );
    }
}
