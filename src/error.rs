//! Error types for icon generation.

use std::path::PathBuf;

use image::ImageError;
use palette::rgb::FromHexError;
use thiserror::Error;

/// Errors raised while generating adaptive icon assets.
///
/// Only [`Error::ConfigUnavailable`] is recoverable: callers fall back to the
/// built-in background color. Every other variant aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source image path does not exist.
    #[error("source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source image exists but could not be decoded.
    #[error("failed to decode source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// The project manifest is missing, unreadable or malformed.
    #[error("project manifest {} is unavailable: {reason}", path.display())]
    ConfigUnavailable { path: PathBuf, reason: String },

    /// A background color string is not valid hex.
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: FromHexError,
    },

    /// An output directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl Error {
    /// Returns true if the error is recovered locally rather than aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConfigUnavailable { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_errors_are_recoverable() {
        let config = Error::ConfigUnavailable {
            path: PathBuf::from("app.json"),
            reason: "missing".into(),
        };
        let missing = Error::SourceNotFound {
            path: PathBuf::from("icon.png"),
        };

        assert!(config.is_recoverable());
        assert!(!missing.is_recoverable());
    }

    #[test]
    fn display_includes_path() {
        let err = Error::SourceNotFound {
            path: PathBuf::from("assets/images/icon.png"),
        };
        assert_eq!(
            err.to_string(),
            "source image not found: assets/images/icon.png"
        );
    }
}
