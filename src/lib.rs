//! `collect_code` is a library and command-line tool that bundles a
//! configured list of files and directories into one annotated text document.
//!
//! Every collected file becomes a record in the output:
//!
//! ```text
//! --- INICIO DEL ARCHIVO: src/main.js ---
//! <content>
//! --- FIN DEL ARCHIVO: src/main.js ---
//!
//! ```
//!
//! A file that cannot be read (for example because it is not valid UTF-8)
//! gets an `--- ERROR AL LEER EL ARCHIVO: <path> - <reason> ---` line instead
//! of its content and end marker. Targets that do not exist are skipped with
//! a warning in the log.
//!
//! As a library, it provides a two-stage pipeline:
//! 1.  **Discover**: resolve the targets and expand directories into a list of files.
//! 2.  **Collect**: read each file and write its record.
//!
//! # Example: Library Usage
//!
//! ```
//! use collect_code::{collect, discover_files, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = tempdir()?;
//! fs::write(project.path().join("a.txt"), "hello")?;
//! fs::create_dir(project.path().join("dir"))?;
//! fs::write(project.path().join("dir").join("b.txt"), "world")?;
//!
//! let config = ConfigBuilder::new()
//!     .root(project.path().to_str().unwrap())
//!     .targets(vec!["a.txt".to_string(), "dir/".to_string()])
//!     .output_path(project.path().join("bundle.txt").to_str().unwrap())
//!     .build()?;
//!
//! let discovery = discover_files(&config);
//! let mut buffer = Vec::new();
//! let summary = collect(&discovery, &mut buffer)?;
//!
//! assert_eq!(summary.files_collected, 2);
//! let output = String::from_utf8(buffer)?;
//! assert!(output.starts_with("--- INICIO DEL ARCHIVO: a.txt ---\nhello\n"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod processing;

pub use config::{Config, ConfigBuilder};
pub use core_types::{CollectionSummary, Discovery, FileInfo};
pub use discovery::discover_files;

use crate::errors::{io_error_with_path, Result};
use log::info;
use std::io::Write;

/// Writes the records for every discovered file to `writer`.
///
/// Per-file read failures are written inline and counted; they never make
/// this function fail. The missing targets of `discovery` are copied into the
/// returned summary.
///
/// # Errors
/// Returns `Error::Write` if writing to `writer` fails.
pub fn collect(discovery: &Discovery, writer: &mut dyn Write) -> Result<CollectionSummary> {
    let mut summary = output::generate_output(&discovery.files, writer)?;
    summary.missing_targets = discovery.missing_targets.clone();
    Ok(summary)
}

/// Executes a complete run: discover the targets, then write the output document.
///
/// The output file is created (truncating any previous content) only after
/// discovery, and closed before returning.
///
/// # Errors
/// Returns `Error::Io` if the output document cannot be created or written.
/// Missing targets and unreadable files are not errors.
pub fn run(config: &Config) -> Result<CollectionSummary> {
    info!("Starting file collection in: {}", config.root.display());

    let discovery = discover_files(config);

    let mut writer = output::writer::setup_output_writer(&config.output_path)?;
    let mut summary = output::generate_output(&discovery.files, &mut writer)
        .map_err(|e| io_error_with_path(e, &config.output_path))?;
    output::writer::finalize_output(writer, &config.output_path)?;
    summary.missing_targets = discovery.missing_targets;

    info!(
        "Collection complete. Content saved to '{}' ({} records: {} files, {} read errors; {} missing targets)",
        config.output_path.display(),
        summary.records(),
        summary.files_collected,
        summary.read_errors,
        summary.missing_targets.len()
    );
    Ok(summary)
}
