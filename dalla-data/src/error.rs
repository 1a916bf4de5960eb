//! Error types raised while loading seed data.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing a seed file.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading the seed file failed.
    #[error("failed to read seed file at {path}")]
    ReadFile {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The seed file did not parse as the expected JSON shape.
    #[error("failed to parse seed file at {path}")]
    Parse {
        /// Offending file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
