//! Result rendering.

use std::io::Write;

use serde_json::Value;

use crate::error::CliError;

/// Write `value` as JSON followed by a newline.
///
/// # Errors
///
/// Returns [`CliError::Encode`] or [`CliError::Output`] when writing fails.
pub fn write_value<W: Write>(writer: &mut W, value: &Value, pretty: bool) -> Result<(), CliError> {
    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    };
    encoded.map_err(CliError::Encode)?;
    writeln!(writer).map_err(CliError::Output)?;
    writer.flush().map_err(CliError::Output)
}
