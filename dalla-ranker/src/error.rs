//! Error types raised while ranking cities or persisting embeddings.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use dalla_core::EmbeddingError;
use thiserror::Error;

/// Errors raised by the ranking pipeline.
#[derive(Debug, Error)]
pub enum RankError {
    /// Embedding the user's preference text failed.
    #[error("failed to embed user preference text")]
    UserEmbedding {
        /// Source error from the embedding gateway.
        #[source]
        source: EmbeddingError,
    },
    /// Creating the parent directory for an artifact failed.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Path of the directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing an artifact file failed.
    #[error("failed to write artifact at {path}")]
    WriteFile {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Opening an artifact file for reading failed.
    #[error("failed to open artifact at {path}")]
    OpenFile {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising embeddings to `bincode` failed.
    #[error("failed to serialise embeddings into {path}")]
    Serialise {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
    /// Deserialising embeddings from `bincode` failed.
    #[error("failed to deserialise embeddings from {path}")]
    Deserialise {
        /// Source file path.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
    /// Serialising a ranking to JSON failed.
    #[error("failed to serialise ranking into {path}")]
    SerialiseJson {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
