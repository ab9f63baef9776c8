// src/config/builder.rs

use super::{
    path_resolve::{resolve_output_path, resolve_root},
    validation::{validate_output_path, validate_root},
    Config,
};
use crate::cli::Cli;
use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_TARGETS};
use crate::errors::Result;
use log::debug;

/// Builds a [`Config`] from explicit settings, falling back to the compiled-in
/// defaults for anything left unset.
///
/// # Examples
///
/// ```
/// use collect_code::ConfigBuilder;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let project = tempdir()?;
/// let config = ConfigBuilder::new()
///     .root(project.path().to_str().unwrap())
///     .targets(vec!["src/".to_string(), "Cargo.toml".to_string()])
///     .output_path(project.path().join("bundle.txt").to_str().unwrap())
///     .build()?;
///
/// assert_eq!(config.targets, vec!["src/", "Cargo.toml"]);
/// assert!(config.root.is_absolute());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root: Option<String>,
    targets: Option<Vec<String>>,
    output_path: Option<String>,
}

impl ConfigBuilder {
    /// Creates a builder with every setting unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    ///
    /// An empty positional target list means "use the defaults".
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            root: cli.root,
            targets: if cli.targets.is_empty() {
                None
            } else {
                Some(cli.targets)
            },
            output_path: cli.output,
        }
    }

    /// Sets the root directory. Without it the executable's directory is used.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the ordered list of targets.
    pub fn targets(mut self, targets: Vec<String>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Sets the destination of the aggregated document.
    pub fn output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Resolves paths, applies defaults and validates the result.
    ///
    /// # Errors
    /// Returns `Error::Config` if the root cannot be resolved or is not a
    /// directory, or if the output path is empty.
    pub fn build(self) -> Result<Config> {
        let root = resolve_root(self.root.as_deref())?;
        validate_root(&root)?;

        let targets = self
            .targets
            .unwrap_or_else(|| DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect());

        let output = self
            .output_path
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());
        validate_output_path(&output)?;
        let output_path = resolve_output_path(&output)?;

        let config = Config {
            root,
            targets,
            output_path,
        };
        debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}
