//! Error types produced by merging, layering and document loading.

mod hierarchy;
mod load;
mod types;

pub use hierarchy::HierarchyError;
pub use load::LoadError;
pub use types::{MergeError, MergeResult};
