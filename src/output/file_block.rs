// src/output/file_block.rs

use crate::constants::{END_MARKER_PREFIX, ERROR_MARKER_PREFIX, MARKER_SUFFIX, START_MARKER_PREFIX};
use crate::processing::ReadOutcome;
use std::io::{self, Write};
use std::path::Path;

/// Writes one file record: start marker, then either the content and the end
/// marker, or an error line. Every record ends with a blank line.
///
/// A newline always separates the content from the end marker, even when the
/// content already ends with one. A failed read gets no end marker.
pub fn write_file_block(
    writer: &mut dyn Write,
    label: &Path,
    outcome: &ReadOutcome,
) -> io::Result<()> {
    let label = label.display();
    writeln!(writer, "{} {} {}", START_MARKER_PREFIX, label, MARKER_SUFFIX)?;
    match outcome {
        ReadOutcome::Content(content) => {
            writer.write_all(content.as_bytes())?;
            write!(
                writer,
                "\n{} {} {}\n\n",
                END_MARKER_PREFIX, label, MARKER_SUFFIX
            )?;
        }
        ReadOutcome::Failed(description) => {
            write!(
                writer,
                "\n{} {} - {} {}\n\n",
                ERROR_MARKER_PREFIX, label, description, MARKER_SUFFIX
            )?;
        }
    }
    Ok(())
}
