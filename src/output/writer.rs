// src/output/writer.rs

//! Opens and closes the output document.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates (or truncates) the output document and wraps it in a `BufWriter`.
///
/// # Errors
/// Returns `Error::Io` naming the path if the file cannot be created.
pub fn setup_output_writer(path: &Path) -> Result<BufWriter<File>> {
    debug!("Opening output document: {}", path.display());
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(BufWriter::new(file))
}

/// Flushes and closes the output document.
///
/// # Errors
/// Returns `Error::Io` naming the path if the final flush fails.
pub fn finalize_output(mut writer: BufWriter<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| io_error_with_path(e, path))?;
    debug!("Closed output document: {}", path.display());
    Ok(())
}
