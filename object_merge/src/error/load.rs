//! Failures raised while reading mapping documents.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// Reading or decoding the document failed.
    #[error("document error in '{path}': {source}")]
    File {
        /// Path of the failing document.
        path: Utf8PathBuf,
        /// Underlying I/O or decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The extension does not name a supported format.
    #[error("unsupported document format for '{path}'")]
    UnsupportedFormat {
        /// Path with the unrecognised extension.
        path: Utf8PathBuf,
    },

    /// The format is known but its crate feature is disabled.
    #[error("{feature} feature disabled: enable the '{feature}' feature to load '{path}'")]
    FeatureDisabled {
        /// Path that requires the feature.
        path: Utf8PathBuf,
        /// Name of the missing feature.
        feature: &'static str,
    },
}

impl LoadError {
    /// Path of the document that failed to load.
    #[must_use]
    pub fn path(&self) -> &camino::Utf8Path {
        match self {
            Self::File { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::FeatureDisabled { path, .. } => path,
        }
    }
}
