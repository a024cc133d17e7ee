//! Layer manifests for the `layers` command.
//!
//! A manifest lists layers in dependency order:
//!
//! ```json
//! {"layers": [
//!     {"name": "base", "file": "base.toml"},
//!     {"name": "prod", "includes": ["base"], "file": "prod.toml"}
//! ]}
//! ```
//!
//! Layer files are resolved against the manifest's directory.

use camino::{Utf8Path, Utf8PathBuf};
use object_merge::{Hierarchy, load_document};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// Parsed manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Layers in the order they are registered.
    pub layers: Vec<LayerEntry>,
}

/// One manifest entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerEntry {
    /// Unique layer name.
    pub name: String,
    /// Names of earlier layers this one builds on.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Document holding the layer's values.
    pub file: Utf8PathBuf,
}

impl Manifest {
    /// Load a manifest from any supported document format.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Load`] when the file cannot be read and
    /// [`CliError::Manifest`] when it has the wrong shape.
    pub fn load(path: &Utf8Path) -> Result<Self, CliError> {
        let value = load_document(path)?;
        serde_json::from_value(value).map_err(|source| CliError::Manifest {
            path: path.to_owned(),
            source,
        })
    }

    /// Load every layer document, resolving paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Load`] for unreadable layer files and
    /// [`CliError::Hierarchy`] for duplicate names or unknown includes.
    pub fn into_hierarchy(self, base: &Utf8Path) -> Result<Hierarchy, CliError> {
        let mut hierarchy = Hierarchy::with_capacity(self.layers.len());
        for LayerEntry {
            name,
            includes,
            file,
        } in self.layers
        {
            let location = base.join(&file);
            let value = load_document(&location)?;
            let priority = hierarchy.push(name, includes, value)?;
            debug!(file = %location, priority, "loaded layer document");
        }
        Ok(hierarchy)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, anyhow, ensure};
    use camino::Utf8Path;
    use serde_json::json;

    use super::Manifest;

    #[test]
    fn includes_default_to_empty() -> Result<()> {
        let manifest: Manifest = serde_json::from_value(json!({
            "layers": [{"name": "base", "file": "base.json"}],
        }))?;
        let entry = manifest
            .layers
            .first()
            .ok_or_else(|| anyhow!("expected one layer"))?;
        ensure!(entry.includes.is_empty());
        ensure!(entry.file == Utf8Path::new("base.json"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed = serde_json::from_value::<Manifest>(json!({
            "layers": [{"name": "base", "file": "base.json", "priority": 3}],
        }));
        assert!(parsed.is_err());
    }
}
