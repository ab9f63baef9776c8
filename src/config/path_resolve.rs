// src/config/path_resolve.rs

use crate::errors::ConfigError;
use std::env;
use std::path::{Path, PathBuf};

/// Resolves the root directory to an absolute, canonicalized path.
///
/// An explicit root is canonicalized as given. Without one, the root is the
/// directory that contains the running executable.
pub fn resolve_root(explicit: Option<&str>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(root) => Path::new(root)
            .canonicalize()
            .map_err(|e| ConfigError::RootUnavailable(format!("'{}': {}", root, e))),
        None => executable_dir(),
    }
}

/// Returns the canonicalized directory containing the current executable.
pub fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|e| ConfigError::RootUnavailable(e.to_string()))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConfigError::RootUnavailable(format!(
            "executable '{}' has no parent directory",
            exe.display()
        ))
    })
}

/// Makes the output path absolute. Relative paths resolve against the current
/// working directory, not the root.
pub fn resolve_output_path(output: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(output);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(|e| ConfigError::InvalidValue {
        option: "--output".to_string(),
        reason: format!("cannot resolve relative path against the working directory: {}", e),
    })?;
    Ok(cwd.join(path))
}

/// Canonical form of a path whose final component may not exist yet.
///
/// The parent directory is canonicalized and the file name appended. Returns
/// `None` when the parent cannot be resolved.
pub fn canonicalize_lenient(path: &Path) -> Option<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Some(canonical);
    }
    let file_name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|p| p.join(file_name))
}
