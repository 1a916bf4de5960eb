//! Ranks cities against a user preference vector.
//!
//! The pipeline embeds the user's query sentence (see `dalla-query`),
//! compares it to each city's precomputed description embedding with
//! cosine similarity, subtracts any dislike penalty, and sorts the result.
//! Cities lacking an embedding are skipped with a warning rather than
//! failing the whole run.
//!
//! Two dislike mechanisms compose:
//! - [`user_vector`] subtracts a dislikes embedding from the likes
//!   embedding before any similarity is computed;
//! - a [`PenaltyStrategy`] subtracts an explicit amount per disliked tag
//!   the city exhibits, after similarity is computed.

#![forbid(unsafe_code)]

mod error;
mod penalty;
mod store;
mod types;
mod user;

pub use error::RankError;
pub use penalty::{
    DEFAULT_PENALTY_PER_WEIGHT_POINT, NoPenalty, PenaltyPolicy, PenaltyStrategy, TagPenalty,
    tag_penalty,
};
pub use store::{CityEmbedding, read_embeddings_file, write_embeddings_file, write_ranking_json};
pub use types::{EmbedOutcome, RankedCity};
pub use user::user_vector;

use dalla_core::vector::cosine_similarity;
use dalla_core::{City, EmbeddingGateway};

/// Rank `cities` against a prepared user vector.
///
/// Output is sorted by `final_score` descending; cities with equal scores
/// keep their input order. Cities without an embedding are skipped with a
/// warning. An empty input yields an empty ranking.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "scores are combined arithmetically")]
pub fn rank_cities(
    user_vector: &[f32],
    cities: &[City],
    penalty: &dyn PenaltyStrategy,
) -> Vec<RankedCity> {
    let mut ranked: Vec<RankedCity> = cities
        .iter()
        .filter_map(|city| {
            let Some(embedding) = city.embedding.as_ref() else {
                log::warn!("skipping city '{}' ({}): no stored embedding", city.name, city.id);
                return None;
            };
            let similarity = cosine_similarity(user_vector, embedding);
            let applied = penalty.penalty(city);
            Some(RankedCity {
                id: city.id,
                name: city.name.clone(),
                similarity,
                penalty: applied,
                final_score: similarity - applied,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    ranked
}

/// Embed the user's preference texts and rank `cities` in one call.
///
/// # Errors
/// Returns [`RankError::UserEmbedding`] when the gateway cannot embed the
/// likes or dislikes text.
pub fn rank_cities_by_text(
    gateway: &dyn EmbeddingGateway,
    likes_text: &str,
    dislikes_text: Option<&str>,
    cities: &[City],
    penalty: &dyn PenaltyStrategy,
) -> Result<Vec<RankedCity>, RankError> {
    let vector = user_vector(gateway, likes_text, dislikes_text)?;
    Ok(rank_cities(&vector, cities, penalty))
}

/// Embed the descriptions of all cities that need one.
///
/// Cities that already carry an embedding are left untouched. Cities
/// without a description, and cities whose text the gateway fails to
/// encode, are skipped with a warning and counted in the outcome.
pub fn embed_cities(gateway: &dyn EmbeddingGateway, cities: &mut [City]) -> EmbedOutcome {
    let mut outcome = EmbedOutcome::default();
    for city in cities.iter_mut() {
        if city.embedding.is_some() {
            continue;
        }
        let Some(description) = city.description.as_deref() else {
            log::warn!("skipping city '{}' ({}): no description to embed", city.name, city.id);
            outcome.skipped += 1;
            continue;
        };
        match gateway.embed(description) {
            Ok(embedding) => {
                city.embedding = Some(embedding);
                outcome.embedded += 1;
            }
            Err(error) => {
                log::warn!("failed to embed city '{}' ({}): {error}", city.name, city.id);
                outcome.skipped += 1;
            }
        }
    }
    outcome
}
