//! Result records produced by the ranking pipeline.

use serde::{Deserialize, Serialize};

/// One city in a ranking, scored against a user preference vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCity {
    /// Identifier of the city.
    pub id: u64,
    /// Display name of the city.
    pub name: String,
    /// Cosine similarity between the user vector and the city embedding.
    pub similarity: f32,
    /// Additive penalty from disliked attributes the city exhibits.
    pub penalty: f32,
    /// `similarity - penalty`; the ranking key.
    pub final_score: f32,
}

/// Outcome of embedding a batch of cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmbedOutcome {
    /// Cities that received a fresh embedding.
    pub embedded: usize,
    /// Cities skipped for lacking a description or failing to encode.
    pub skipped: usize,
}
