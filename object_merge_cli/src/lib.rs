//! Library half of the `object-merge` binary.
//!
//! Loads documents with [`object_merge::load_document`], merges them and
//! writes the result to stdout as JSON. Settings layer through `figment`; see
//! [`settings`].

pub mod cli;
pub mod commands;
pub mod error;
mod logging;
pub mod manifest;
pub mod output;
pub mod settings;

use std::io;

pub use cli::{CommandLine, Commands};
pub use error::CliError;

/// Run the command described by `cli`.
///
/// # Errors
///
/// Returns a [`CliError`] when settings, loading, merging or output fail.
pub fn run(cli: &CommandLine) -> Result<(), CliError> {
    let settings = settings::load_settings(cli.config_path.as_deref(), &cli.overrides())?;
    logging::init(&settings.log_level)?;
    let value = match &cli.command {
        Commands::Merge(args) => {
            commands::merge_documents(&args.target, &args.sources, settings.overwrite)?
        }
        Commands::Layers(args) => commands::resolve_layers(&args.manifest)?,
    };
    output::write_value(&mut io::stdout().lock(), &value, settings.pretty)
}
