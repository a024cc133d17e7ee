//! Primary error enum for merge operations.

use thiserror::Error;

use crate::ValueKind;

/// Result alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that can occur while merging sources into a target.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum MergeError {
    /// A key collided while overwriting was disabled.
    #[error(
        "Confliction has been detected on property {path} when merging the {source_index}th param into the target"
    )]
    Conflict {
        /// Dotted path of the conflicting key, rooted at `ROOT`.
        path: String,
        /// One-based position of the source being merged.
        source_index: usize,
    },

    /// The merge target is not a mapping.
    #[error("merge target must be an object, but found {found}")]
    TargetNotMapping {
        /// Shape of the rejected target.
        found: ValueKind,
    },

    /// A source is not a mapping.
    #[error("source {source_index} must be an object, but found {found}")]
    SourceNotMapping {
        /// One-based position of the rejected source.
        source_index: usize,
        /// Shape of the rejected source.
        found: ValueKind,
    },
}

impl MergeError {
    /// Path of the conflicting key, when this is a conflict.
    ///
    /// ```
    /// use object_merge::{MergeError, merge};
    /// use serde_json::json;
    ///
    /// let mut target = json!({"a": {"b": 1}});
    /// let err = merge(&mut target, [&json!({"a": {"b": 2}})], false)
    ///     .expect_err("leaf collision must be rejected");
    /// assert_eq!(err.path(), Some("ROOT.a.b"));
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Conflict { path, .. } => Some(path),
            Self::TargetNotMapping { .. } | Self::SourceNotMapping { .. } => None,
        }
    }

    /// One-based position of the source that triggered the error, if any.
    #[must_use]
    pub const fn source_index(&self) -> Option<usize> {
        match self {
            Self::Conflict { source_index, .. } | Self::SourceNotMapping { source_index, .. } => {
                Some(*source_index)
            }
            Self::TargetNotMapping { .. } => None,
        }
    }
}
