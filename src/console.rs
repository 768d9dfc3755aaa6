//! The console boundary shared by both vehicle variants.

use crate::error::DriveError;
use std::io::{self, Write};

/// Write one drive line to `out`.
pub(crate) fn write_line(out: &mut dyn Write, line: &str) -> Result<(), DriveError> {
    writeln!(out, "{line}")?;
    Ok(())
}

/// Print one drive line to standard output.
///
/// Console printing is infallible from the caller's view; a failed write
/// is logged and dropped.
pub(crate) fn print_line(line: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = write_line(&mut handle, line) {
        log::warn!("dropped drive line {line:?}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "Normal driving").unwrap();
        assert_eq!(out, b"Normal driving\n");
    }

    #[test]
    fn print_line_reaches_stdout_without_panicking() {
        print_line("Sports drive capability");
    }
}
