//! Failures raised while assembling or merging a layer hierarchy.

use thiserror::Error;

use super::MergeError;
use crate::ValueKind;

/// Errors that can occur while building or merging a [`crate::Hierarchy`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HierarchyError {
    /// Two layers share a name.
    #[error("layer '{name}' is defined more than once")]
    DuplicateLayer {
        /// Name that was pushed twice.
        name: String,
    },

    /// A layer includes a name that has not been pushed yet.
    #[error("layer '{layer}' includes unknown layer '{include}'")]
    UnknownInclude {
        /// Layer declaring the include.
        layer: String,
        /// Include that could not be resolved.
        include: String,
    },

    /// A layer value is not a mapping.
    #[error("layer '{layer}' must be an object, but found {found}")]
    NotMapping {
        /// Layer carrying the rejected value.
        layer: String,
        /// Shape of the rejected value.
        found: ValueKind,
    },

    /// Layers of equal priority disagree on a value.
    #[error("layer '{layer}' conflicts with a peer at priority {priority}")]
    Conflict {
        /// Layer whose merge was rejected.
        layer: String,
        /// Priority shared by the conflicting layers.
        priority: usize,
        /// Conflict reported by the merger.
        #[source]
        source: MergeError,
    },

    /// Folding a priority group into the accumulated result failed.
    #[error("failed to merge priority groups: {0}")]
    Merge(#[from] MergeError),
}
