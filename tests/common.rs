// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn collect_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("collect-code"))
}

/// Creates a file (and its parent directories) under `dir`.
#[allow(dead_code)]
pub fn create_file(
    dir: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

/// Platform-native label for a path given with `/` separators.
#[allow(dead_code)]
pub fn label(path: &str) -> String {
    path.split('/')
        .collect::<std::path::PathBuf>()
        .display()
        .to_string()
}
