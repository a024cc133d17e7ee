//! Command implementations. Each returns the merged document.

use camino::{Utf8Path, Utf8PathBuf};
use object_merge::{Merger, load_document};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CliError;
use crate::manifest::Manifest;

/// Load `target` and fold each of `sources` into it.
///
/// All documents are loaded before any merging starts.
///
/// # Errors
///
/// Returns [`CliError::Load`] for unreadable documents and
/// [`CliError::Merge`] for shape errors or conflicts.
pub fn merge_documents(
    target: &Utf8Path,
    sources: &[Utf8PathBuf],
    overwrite: bool,
) -> Result<Value, CliError> {
    let mut merged = load_document(target)?;
    let documents = sources
        .iter()
        .map(Utf8PathBuf::as_path)
        .map(load_document)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(target = %target, sources = documents.len(), overwrite, "merging documents");
    Merger::new()
        .overwrite(overwrite)
        .merge(&mut merged, documents)?;
    info!(target = %target, "merge complete");
    Ok(merged)
}

/// Resolve the hierarchy described by the manifest at `path`.
///
/// # Errors
///
/// Propagates manifest, document and hierarchy failures.
pub fn resolve_layers(path: &Utf8Path) -> Result<Value, CliError> {
    let manifest = Manifest::load(path)?;
    let base = path.parent().unwrap_or_else(|| Utf8Path::new(""));
    let hierarchy = manifest.into_hierarchy(base)?;
    info!(manifest = %path, layers = hierarchy.len(), "resolving layers");
    Ok(hierarchy.merge()?)
}
