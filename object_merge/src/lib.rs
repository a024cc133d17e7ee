//! Core crate for iterative deep merging of JSON-shaped mappings.
//!
//! [`Merger`] folds an ordered list of source mappings into a target mapping,
//! merging nested mappings key by key and resolving leaf collisions according
//! to an overwrite policy. [`Hierarchy`] builds on it to merge named layers
//! that include one another, and [`load_document`] decodes JSON, JSON5, YAML
//! and TOML files into the shared [`serde_json::Value`] model.
//!
//! ```rust
//! use object_merge::{MergeError, Merger};
//! use serde_json::json;
//!
//! let mut target = json!({"server": {"host": "localhost"}});
//! let defaults = json!({"server": {"port": 8080}});
//! Merger::new().merge(&mut target, [&defaults])?;
//! assert_eq!(target, json!({"server": {"host": "localhost", "port": 8080}}));
//! # Ok::<_, MergeError>(())
//! ```

mod args;
pub mod document;
mod error;
pub mod hierarchy;
pub mod merge;
mod value;

pub use args::merge_arguments;
pub use document::{DocumentFormat, load_document, parse_document};
pub use error::{HierarchyError, LoadError, MergeError, MergeResult};
pub use hierarchy::{Hierarchy, Layer};
pub use merge::{MergeSource, Merger, ROOT_PATH, merge};
pub use serde_json;
pub use value::ValueKind;
