//! Defines the `Config` struct used by every stage of a collection run.
//!
//! A `Config` is always produced by [`ConfigBuilder`], which resolves the root
//! directory, applies the compiled-in defaults and validates the result.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;
mod validation;

/// Settings for one collection run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute, canonicalized directory that targets and labels are relative to.
    pub root: PathBuf,
    /// Files and directories to collect, relative to `root`, in output order.
    pub targets: Vec<String>,
    /// Destination of the aggregated document. Absolute; truncated at the start of a run.
    pub output_path: PathBuf,
}

impl Config {
    /// Returns the absolute path a target resolves to.
    pub fn resolve_target(&self, target: &str) -> PathBuf {
        self.root.join(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_joins_root() {
        let config = Config {
            root: PathBuf::from("/project"),
            targets: vec!["src/".to_string()],
            output_path: PathBuf::from("/project/out.txt"),
        };
        assert_eq!(
            config.resolve_target("package.json"),
            PathBuf::from("/project/package.json")
        );
        assert_eq!(config.resolve_target("src/"), PathBuf::from("/project/src"));
    }
}
