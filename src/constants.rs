// src/constants.rs

/// Targets collected when none are given on the command line.
pub const DEFAULT_TARGETS: &[&str] = &["package.json", "vite.config.js", "src/", ".env.local"];

/// Name of the aggregated document when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "codigo_proyecto.txt";

/// Prefix of the line that opens a file record.
pub const START_MARKER_PREFIX: &str = "--- INICIO DEL ARCHIVO:";

/// Prefix of the line that closes a successfully read file record.
pub const END_MARKER_PREFIX: &str = "--- FIN DEL ARCHIVO:";

/// Prefix of the line that replaces the content when a file cannot be read.
pub const ERROR_MARKER_PREFIX: &str = "--- ERROR AL LEER EL ARCHIVO:";

/// Suffix shared by every marker line.
pub const MARKER_SUFFIX: &str = "---";
