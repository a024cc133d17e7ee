//! Error type for the `object-merge` binary.
//!
//! `CliError` gathers library failures alongside settings and output problems
//! so `main` can hand a single error to `color-eyre`.

use std::io;

use camino::Utf8PathBuf;
use object_merge::{HierarchyError, LoadError, MergeError};
use thiserror::Error;

/// Errors raised while running a command.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Settings could not be extracted from the configured layers.
    #[error("failed to load settings: {0}")]
    Settings(Box<figment::Error>),
    /// An explicitly requested settings file does not exist.
    #[error("settings file '{path}' does not exist")]
    MissingConfig {
        /// Path passed through `--config`.
        path: Utf8PathBuf,
    },
    /// A document failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Merging the loaded documents failed.
    #[error(transparent)]
    Merge(#[from] MergeError),
    /// The layer manifest describes an invalid hierarchy.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
    /// The layer manifest does not have the expected shape.
    #[error("invalid layer manifest '{path}': {source}")]
    Manifest {
        /// Manifest location.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    /// Serialising the result failed.
    #[error("failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}
