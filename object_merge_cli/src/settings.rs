//! Layered settings for the binary.
//!
//! Settings resolve in increasing precedence: built-in defaults, a TOML file,
//! `OBJECT_MERGE_` environment variables, then command-line flags.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Settings file read from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "object-merge.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "OBJECT_MERGE_";

/// Resolved settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Replace conflicting values instead of failing.
    pub overwrite: bool,
    /// Pretty-print the JSON result.
    pub pretty: bool,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overwrite: true,
            pretty: true,
            log_level: "warn".to_owned(),
        }
    }
}

/// Values supplied on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Default, Serialize)]
pub struct Overrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) log_level: Option<&'a str>,
}

/// Resolve settings from every layer.
///
/// An explicit `config` path must exist. Without one, [`CONFIG_FILE`] in the
/// working directory is used when present.
///
/// # Errors
///
/// Returns [`CliError::MissingConfig`] when `config` names a missing file and
/// [`CliError::Settings`] when a layer cannot be parsed or extracted.
pub fn load_settings(
    config: Option<&Utf8Path>,
    overrides: &Overrides<'_>,
) -> Result<Settings, CliError> {
    let file = match config {
        Some(path) if !path.is_file() => {
            return Err(CliError::MissingConfig {
                path: path.to_owned(),
            });
        }
        Some(path) => Some(path),
        None => Some(Utf8Path::new(CONFIG_FILE)).filter(|path| path.is_file()),
    };
    debug!(file = ?file, "resolving settings");
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));
    if let Some(path) = file {
        figment = figment.merge(Toml::file_exact(path.as_std_path()));
    }
    let settings = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()?;
    Ok(settings)
}
