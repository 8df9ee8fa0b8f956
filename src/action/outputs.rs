//! Step outputs.
//!
//! Outputs are written as `name=value` lines, the format GitHub reads from
//! the file named by `GITHUB_OUTPUT`. Error annotations are workflow
//! commands printed on stdout.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::assignment::domain::StatusSignals;

/// Writes one `name=value` line per signal in `signals`.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_status(writer: &mut impl Write, signals: &StatusSignals) -> io::Result<()> {
    for (name, value) in signals.pairs() {
        writeln!(writer, "{name}={value}")?;
    }
    Ok(())
}

/// Appends `signals` to the output file at `path`, creating it if needed.
///
/// # Errors
///
/// Returns any I/O error raised while opening or writing the file.
pub fn append_status(path: &Path, signals: &StatusSignals) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_status(&mut file, signals)?;
    file.flush()
}

/// Formats `message` as an `::error::` workflow command.
///
/// `%`, carriage returns and newlines are percent-encoded so the message
/// stays on one command line.
#[must_use]
pub fn error_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
