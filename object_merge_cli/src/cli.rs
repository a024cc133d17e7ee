//! Command-line surface of the `object-merge` binary.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::settings::Overrides;

/// Deep-merge configuration documents and print the result as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "object-merge",
    bin_name = "object-merge",
    about = "Deep-merge JSON, TOML, YAML and JSON5 documents",
    version
)]
pub struct CommandLine {
    /// Settings file to use instead of `object-merge.toml`.
    #[arg(long = "config", short = 'c', value_name = "PATH", global = true)]
    pub config_path: Option<Utf8PathBuf>,
    /// Print the result on a single line.
    #[arg(long, global = true)]
    pub compact: bool,
    /// Log filter used when `RUST_LOG` is unset, for example `debug`.
    #[arg(long, value_name = "FILTER", global = true)]
    pub log_level: Option<String>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge source documents into a target document, left to right.
    Merge(MergeArgs),
    /// Merge the layers listed in a manifest by priority.
    Layers(LayersArgs),
}

/// Arguments for `merge`.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Document receiving the merged values.
    #[arg(value_name = "TARGET")]
    pub target: Utf8PathBuf,
    /// Documents merged into the target in order.
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<Utf8PathBuf>,
    /// Replace conflicting values, even when settings disable it.
    #[arg(long, overrides_with = "no_overwrite")]
    pub overwrite: bool,
    /// Fail on the first conflicting key instead of replacing it.
    #[arg(long, overrides_with = "overwrite")]
    pub no_overwrite: bool,
}

/// Arguments for `layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Manifest listing the layers.
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,
}

impl CommandLine {
    /// Settings supplied through flags.
    #[must_use]
    pub fn overrides(&self) -> Overrides<'_> {
        let overwrite = match &self.command {
            Commands::Merge(args) => match (args.overwrite, args.no_overwrite) {
                (_, true) => Some(false),
                (true, false) => Some(true),
                (false, false) => None,
            },
            Commands::Layers(_) => None,
        };
        Overrides {
            overwrite,
            pretty: self.compact.then_some(false),
            log_level: self.log_level.as_deref(),
        }
    }
}
