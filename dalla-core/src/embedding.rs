//! Contract with the external text-embedding model.
//!
//! The model itself is a collaborator: text goes in, a fixed-length float
//! vector comes out. Construction is expensive (model load, possibly a
//! network client), so a gateway is built once per batch and shared; after
//! initialisation it must behave as a stateless function, which is why the
//! trait takes `&self` and requires `Send + Sync`.

use thiserror::Error;

/// A fixed-length float vector produced by the embedding model.
pub type Embedding = Vec<f32>;

/// Errors raised by an embedding backend.
///
/// Callers must propagate these rather than substituting fabricated vectors;
/// batch operations skip the affected record and continue.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The backend could not be reached or initialised.
    #[error("embedding backend unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The backend rejected or failed to encode the input text.
    #[error("failed to encode text of {length} characters")]
    Encode {
        /// Length of the offending input, for log correlation.
        length: usize,
        /// Underlying backend error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Text-to-vector gateway.
///
/// Implementations are assumed deterministic: the same text yields the same
/// vector for the lifetime of the gateway.
///
/// # Examples
/// ```
/// use dalla_core::{Embedding, EmbeddingError, EmbeddingGateway};
///
/// struct Unit;
///
/// impl EmbeddingGateway for Unit {
///     fn embed(&self, _text: &str) -> Result<Embedding, EmbeddingError> {
///         Ok(vec![1.0])
///     }
/// }
///
/// let gateway = Unit;
/// assert_eq!(gateway.embed("anything").unwrap(), vec![1.0]);
/// ```
pub trait EmbeddingGateway: Send + Sync {
    /// Encode `text` into the model's vector space.
    ///
    /// # Errors
    /// Returns [`EmbeddingError`] when the backend is unavailable or fails
    /// to encode the input.
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;
}
