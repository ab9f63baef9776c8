// src/config/validation.rs

use crate::errors::ConfigError;
use std::path::Path;

/// Checks that the resolved root is a directory.
pub(super) fn validate_root(root: &Path) -> Result<(), ConfigError> {
    if !root.is_dir() {
        return Err(ConfigError::RootNotADirectory(root.display().to_string()));
    }
    Ok(())
}

/// Rejects an empty or whitespace-only output path.
pub(super) fn validate_output_path(output: &str) -> Result<(), ConfigError> {
    if output.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "--output".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
