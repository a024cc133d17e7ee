//! Filesystem entry point for document loading.

use camino::Utf8Path;
use serde_json::Value;
use tracing::debug;

use crate::LoadError;

use super::error::file_error;
use super::parser::parse_document;

/// Read and decode the document at `path`.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use object_merge::{Merger, load_document};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut target = load_document(Utf8Path::new("defaults.toml"))?;
/// let local = load_document(Utf8Path::new("local.json"))?;
/// Merger::new().merge(&mut target, [local])?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, its format is not
/// supported, or its contents fail to decode.
pub fn load_document(path: &Utf8Path) -> Result<Value, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    debug!(%path, bytes = data.len(), "read document");
    parse_document(path, &data)
}
