// src/cli.rs

use clap::Parser;

/// Bundles a project's files and directories into a single annotated text document.
///
/// Each collected file is wrapped in `--- INICIO DEL ARCHIVO: <path> ---` and
/// `--- FIN DEL ARCHIVO: <path> ---` markers. Directories are walked
/// recursively. Targets that do not exist are skipped with a warning.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files and directories to collect, relative to the root. Defaults to
    /// package.json, vite.config.js, src/ and .env.local.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Write the aggregated document to this file (overwritten if it exists).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Directory that targets and labels are relative to. Defaults to the
    /// directory containing this executable.
    #[arg(short = 'r', long, value_name = "DIR")]
    pub root: Option<String>,
}
