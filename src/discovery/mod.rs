//! Resolves the configured targets into the ordered list of files to collect.
//!
//! No file content is read here; the output stage reads each file when it
//! writes the record.

use crate::config::path_resolve::canonicalize_lenient;
use crate::config::Config;
use crate::core_types::{Discovery, FileInfo};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tracing::instrument;

mod entry_processor;
mod walker;

use entry_processor::{process_direntry, WalkContext};
use walker::build_walker;

/// How a single configured target resolved on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// The target is a file (symlinks are followed).
    File,
    /// The target is a directory, collected recursively.
    Directory,
    /// The target is neither; it is skipped with a warning.
    Missing,
}

/// Classifies a resolved target path.
pub fn classify_target(path: &Path) -> TargetKind {
    if path.is_file() {
        TargetKind::File
    } else if path.is_dir() {
        TargetKind::Directory
    } else {
        TargetKind::Missing
    }
}

/// Walks the configured targets in order and returns the files to collect.
///
/// File targets keep their configured string as label. Directory targets are
/// expanded depth-first in file-name order, each file labeled relative to the
/// root. Missing targets are logged with a warning and listed in
/// [`Discovery::missing_targets`].
///
/// # Examples
///
/// ```
/// use collect_code::{discover_files, ConfigBuilder};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let project = tempdir()?;
/// fs::write(project.path().join("a.txt"), "hello")?;
///
/// let config = ConfigBuilder::new()
///     .root(project.path().to_str().unwrap())
///     .targets(vec!["a.txt".to_string(), "missing.txt".to_string()])
///     .output_path(project.path().join("out.txt").to_str().unwrap())
///     .build()?;
///
/// let discovery = discover_files(&config);
/// assert_eq!(discovery.files.len(), 1);
/// assert_eq!(discovery.missing_targets, vec!["missing.txt"]);
/// # Ok(())
/// # }
/// ```
#[instrument(level = "debug", skip_all, fields(root = %config.root.display()))]
pub fn discover_files(config: &Config) -> Discovery {
    let mut discovery = Discovery::default();
    let output_path = canonicalize_lenient(&config.output_path);

    for target in &config.targets {
        let target_path = config.resolve_target(target);
        match classify_target(&target_path) {
            TargetKind::File => {
                debug!("Target is a file: {}", target);
                discovery.files.push(FileInfo {
                    absolute_path: target_path,
                    relative_path: PathBuf::from(target),
                });
            }
            TargetKind::Directory => {
                info!("Collecting directory: {}", target);
                let ctx = WalkContext {
                    root: &config.root,
                    target,
                    target_path: &target_path,
                    output_path: output_path.as_deref(),
                };
                let before = discovery.files.len();
                discovery.files.extend(
                    build_walker(&target_path).filter_map(|entry| process_direntry(entry, &ctx)),
                );
                debug!(
                    "Directory '{}' contributed {} files",
                    target,
                    discovery.files.len() - before
                );
            }
            TargetKind::Missing => {
                warn!("Target not found (file or directory), skipping: {}", target);
                discovery.missing_targets.push(target.clone());
            }
        }
    }

    debug!(
        "Discovery complete. Files: {}, missing targets: {}",
        discovery.files.len(),
        discovery.missing_targets.len()
    );
    discovery
}
