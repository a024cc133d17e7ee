//! Diagnostic logging on stderr.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when it holds a valid filter.
///
/// # Errors
///
/// Returns [`CliError::Logging`] when `level` is not a valid filter or a
/// subscriber is already installed.
pub fn init(level: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|err| CliError::Logging(Box::new(err)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(CliError::Logging)
}
