//! The `collect_code` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use collect_code::prelude::*;
//! # fn main() -> Result<()> {
//! # let project = tempfile::tempdir().unwrap();
//! let config = ConfigBuilder::new()
//!     .root(project.path().to_str().unwrap())
//!     .targets(vec!["src/".to_string()])
//!     .output_path(project.path().join("bundle.txt").to_str().unwrap())
//!     .build()?;
//! let summary = run(&config)?;
//! assert_eq!(summary.missing_targets, vec!["src/"]);
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{CollectionSummary, Discovery, FileInfo};
pub use crate::discovery::{classify_target, discover_files, TargetKind};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::processing::{read_file, ReadOutcome};
pub use crate::{collect, run};
