//! Defines application-specific error types.
//!
//! Only fatal conditions live here. A file that cannot be read or a target
//! that does not exist is reported inline or in the log and never surfaces
//! as an `Error`.

use thiserror::Error;

/// The error type for fatal failures in `collect_code`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring while creating or writing the output document.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing records to a caller-supplied writer.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    /// The configuration could not be turned into a usable `Config`.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building a `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No root was given and it could not be derived from the executable location.
    #[error("Could not determine the root directory: {0}")]
    RootUnavailable(String),

    /// The root exists but is not a directory.
    #[error("Root path '{0}' is not a directory")]
    RootNotADirectory(String),

    /// An option was given a value it cannot accept.
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidValue {
        /// The offending option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A specialized `Result` type for `collect_code` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
