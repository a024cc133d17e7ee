//! `object-merge` entry point: parse flags, run the command, report errors.

use clap::Parser;
use object_merge_cli::{CommandLine, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = CommandLine::parse();
    run(&cli).map_err(color_eyre::eyre::Report::from)
}
