// ueprune-core/src/application/input.rs

use std::io::{self, BufRead};

use crate::domain::class::ClassName;

/// Read the class name from one line of input.
///
/// Only the line terminator is stripped; EOF gives an empty name.
pub fn read_class_name<R: BufRead>(reader: &mut R) -> io::Result<ClassName> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(ClassName::new(strip_line_ending(&line)))
}

/// Block until the operator presses Enter (or input closes).
pub fn wait_for_enter<R: BufRead>(reader: &mut R) -> io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}
