//! Error constructors shared by document loading helpers.

use std::error::Error;

use camino::Utf8Path;

use crate::LoadError;

/// Construct a [`LoadError::File`] for a document path.
pub(super) fn file_error(path: &Utf8Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> LoadError {
    LoadError::File {
        path: path.to_path_buf(),
        source: err.into(),
    }
}

pub(super) fn unsupported_format(path: &Utf8Path) -> LoadError {
    LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    }
}

#[cfg(any(not(feature = "json5"), not(feature = "yaml"), not(feature = "toml")))]
pub(super) fn feature_disabled(path: &Utf8Path, feature: &'static str) -> LoadError {
    LoadError::FeatureDisabled {
        path: path.to_path_buf(),
        feature,
    }
}
