// src/discovery/walker.rs

use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Configures the depth-first walk of one directory target.
///
/// Entries are sorted by file name inside every directory so the order does
/// not depend on the file system. Symlinked directories are not entered.
pub(super) fn build_walker(dir: &Path) -> walkdir::IntoIter {
    debug!("Building walker for directory: {}", dir.display());
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walker_yields_sorted_depth_first() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("b_dir"))?;
        fs::write(root.join("c.txt"), "c")?;
        fs::write(root.join("a.txt"), "a")?;
        fs::write(root.join("b_dir/inner.txt"), "inner")?;

        let names: Vec<String> = build_walker(root)
            .filter_map(|e| e.ok())
            .skip(1) // the root itself
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();

        assert_eq!(names, vec!["a.txt", "b_dir", "b_dir/inner.txt", "c.txt"]);
        Ok(())
    }
}
