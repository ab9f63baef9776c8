// src/main.rs

use anyhow::Result;
use clap::Parser;
use collect_code::cli::Cli;
use collect_code::config::ConfigBuilder;
use collect_code::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "collect_code=debug".parse()?
                } else {
                    "collect_code=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting collect-code v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let args = Cli::parse();

    // --- Configuration & Execution ---
    let config = ConfigBuilder::from_cli(args).build()?;
    log::debug!("Configuration built successfully.");

    let summary = run(&config)?;

    if !summary.is_clean() {
        log::warn!(
            "Finished with {} unreadable files and {} missing targets.",
            summary.read_errors,
            summary.missing_targets.len()
        );
    }

    Ok(())
}
