// src/output/mod.rs

use crate::core_types::{CollectionSummary, FileInfo};
use crate::processing::{read_file, ReadOutcome};
use log::{debug, info, warn};
use std::io::{self, Write};
use tracing::instrument;

pub mod file_block;
pub mod writer;

/// Reads each file in order and writes its record to `writer`.
///
/// A file that cannot be read is written as an error record and counted in
/// `read_errors`; the loop continues with the next file. Only a failure to
/// write to `writer` stops the loop. `missing_targets` in the returned summary
/// is left empty for the caller to fill.
#[instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn generate_output(files: &[FileInfo], writer: &mut dyn Write) -> io::Result<CollectionSummary> {
    debug!("Starting output generation...");
    let mut summary = CollectionSummary::default();

    for file_info in files {
        info!("Collecting file: {}", file_info.relative_path.display());
        let outcome = read_file(file_info);
        match &outcome {
            ReadOutcome::Content(_) => summary.files_collected += 1,
            ReadOutcome::Failed(description) => {
                warn!(
                    "Could not read '{}': {}",
                    file_info.relative_path.display(),
                    description
                );
                summary.read_errors += 1;
            }
        }
        file_block::write_file_block(writer, &file_info.relative_path, &outcome)?;
    }

    debug!("Output generation complete.");
    writer.flush()?;
    Ok(summary)
}
