// src/processing/content_reader.rs

use log::trace;
use std::{fs, io, path::Path};

/// Reads the entire content of a file into a String.
///
/// Fails on any I/O error and on content that is not valid UTF-8.
pub(super) fn read_file_content(path: &Path) -> io::Result<String> {
    trace!("Reading file content: {}", path.display());
    fs::read_to_string(path)
}
