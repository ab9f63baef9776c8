// src/discovery/entry_processor.rs

use crate::core_types::FileInfo;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

/// What a directory walk needs to label and filter its entries.
pub(super) struct WalkContext<'a> {
    /// The canonical root directory.
    pub root: &'a Path,
    /// The directory target exactly as configured.
    pub target: &'a str,
    /// The absolute path of the directory target, not canonicalized.
    pub target_path: &'a Path,
    /// Canonical path of the output document, never collected.
    pub output_path: Option<&'a Path>,
}

/// Processes a single entry from a directory walk.
///
/// Returns `Some(FileInfo)` for anything that is not a directory (regular
/// files and symlinks to non-directories), `None` otherwise. Walk errors are
/// logged and skipped.
pub(super) fn process_direntry(
    entry_result: Result<DirEntry, walkdir::Error>,
    ctx: &WalkContext<'_>,
) -> Option<FileInfo> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(err) => {
            warn!("Walker error under '{}': {}", ctx.target, err);
            return None;
        }
    };

    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    let file_type = entry.file_type();
    if file_type.is_dir() || (file_type.is_symlink() && absolute_path.is_dir()) {
        trace!("Skipping directory entry: {}", absolute_path.display());
        return None;
    }

    if is_output_document(&absolute_path, ctx.output_path) {
        debug!(
            "Skipping the output document itself: {}",
            absolute_path.display()
        );
        return None;
    }

    let relative_path = relative_label(&absolute_path, ctx);
    trace!("Calculated relative path: {}", relative_path.display());

    Some(FileInfo {
        absolute_path,
        relative_path,
    })
}

/// Whether `path` is the output document.
///
/// Walked paths keep the target's `..` segments and symlinked directories, so
/// an entry with the output's file name is canonicalized before comparing.
fn is_output_document(path: &Path, output_path: Option<&Path>) -> bool {
    let Some(output_path) = output_path else {
        return false;
    };
    if path.file_name() != output_path.file_name() {
        return false;
    }
    path.canonicalize()
        .map(|canonical| canonical == output_path)
        .unwrap_or(false)
}

/// Labels a discovered file relative to the root.
///
/// Falls back to the target joined with the path below it when the target
/// lies outside the root.
fn relative_label(absolute_path: &Path, ctx: &WalkContext<'_>) -> PathBuf {
    if let Ok(rel) = absolute_path.strip_prefix(ctx.root) {
        return rel.to_path_buf();
    }
    match absolute_path.strip_prefix(ctx.target_path) {
        Ok(below) => Path::new(ctx.target).join(below),
        Err(err) => {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Using absolute path.",
                ctx.root.display(),
                absolute_path.display(),
                err
            );
            absolute_path.to_path_buf()
        }
    }
}
