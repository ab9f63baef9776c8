//! Defines core data structures shared by the discovery, reading and output stages.

use std::path::PathBuf;

/// A file selected for collection.
///
/// # Examples
///
/// ```
/// use collect_code::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     absolute_path: PathBuf::from("/project/src/main.js"),
///     relative_path: PathBuf::from("src/main.js"),
/// };
///
/// assert_eq!(file_info.relative_path.to_str(), Some("src/main.js"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The path used to open the file.
    pub absolute_path: PathBuf,
    /// The label written into the start/end markers.
    ///
    /// For a file target this is the target exactly as configured. For a file
    /// found under a directory target it is the path relative to the root.
    pub relative_path: PathBuf,
}

/// The result of the discovery stage: what to collect and what was missing.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Files to collect, in output order.
    pub files: Vec<FileInfo>,
    /// Targets that resolved to neither a file nor a directory, in configured order.
    pub missing_targets: Vec<String>,
}

/// What a run wrote, for reporting back to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Records written with their full content and an end marker.
    pub files_collected: usize,
    /// Records written with an error annotation instead of content.
    pub read_errors: usize,
    /// Targets that were skipped because they do not exist.
    pub missing_targets: Vec<String>,
}

impl CollectionSummary {
    /// Total number of records in the output document.
    pub fn records(&self) -> usize {
        self.files_collected + self.read_errors
    }

    /// `true` when every target existed and every file was read.
    pub fn is_clean(&self) -> bool {
        self.read_errors == 0 && self.missing_targets.is_empty()
    }
}
