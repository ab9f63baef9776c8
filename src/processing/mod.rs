//! Reads the content of discovered files.
//!
//! A failed read is an ordinary outcome here, not an error for the caller:
//! the output stage turns it into an inline error record and moves on.

use crate::core_types::FileInfo;
use log::debug;

mod content_reader;

use content_reader::read_file_content;

/// The content of one file, or why it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The full content, decoded as UTF-8.
    Content(String),
    /// A human-readable description of the failure.
    Failed(String),
}

/// Reads one discovered file in full.
///
/// # Examples
///
/// ```
/// use collect_code::core_types::FileInfo;
/// use collect_code::processing::{read_file, ReadOutcome};
/// use std::path::PathBuf;
///
/// let missing = FileInfo {
///     absolute_path: PathBuf::from("/no/such/file.txt"),
///     relative_path: PathBuf::from("file.txt"),
/// };
/// assert!(matches!(read_file(&missing), ReadOutcome::Failed(_)));
/// ```
pub fn read_file(file_info: &FileInfo) -> ReadOutcome {
    match read_file_content(&file_info.absolute_path) {
        Ok(content) => ReadOutcome::Content(content),
        Err(e) => {
            debug!(
                "Failed to read '{}': {}",
                file_info.absolute_path.display(),
                e
            );
            ReadOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_file_content() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.txt");
        fs::write(&path, "hello")?;
        let info = FileInfo {
            absolute_path: path,
            relative_path: "a.txt".into(),
        };
        assert_eq!(read_file(&info), ReadOutcome::Content("hello".to_string()));
        Ok(())
    }

    #[test]
    fn test_read_file_invalid_utf8_is_failure() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("image.png");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe])?;
        let info = FileInfo {
            absolute_path: path,
            relative_path: "image.png".into(),
        };
        match read_file(&info) {
            ReadOutcome::Failed(msg) => assert!(msg.contains("UTF-8")),
            other => panic!("Expected a read failure, got {:?}", other),
        }
        Ok(())
    }
}
