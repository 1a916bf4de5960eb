//! Manual tag-vector recommendation engine.
//!
//! Unlike the embedding pipeline in `dalla-ranker`, this engine never
//! touches a language model: POIs and cities are projected onto a small
//! fixed vocabulary of weighted tag dimensions, scored against the user's
//! tag vector with plain dot products, and folded into one ranked list of
//! cities. It trades semantic nuance for speed and full explainability,
//! which suits constrained clients.

#![forbid(unsafe_code)]

mod aggregate;
mod recommend;
mod vectorize;

pub use aggregate::{
    CityRecommendation, CityScoreWeights, DEFAULT_DIVERSITY_SCALE, DEFAULT_RELEVANCE_FLOOR,
    DEFAULT_TOP_POIS, InvalidCityScoreWeight, aggregate_by_city,
};
pub use recommend::{
    BlendWeights, DEFAULT_CITY_WEIGHT, DEFAULT_POI_WEIGHT, InvalidBlendWeight, VectorItem,
    build_items, recommend,
};
pub use vectorize::vectorize;

use dalla_core::CanonicalTag;

/// Run the whole manual pipeline: vectorize the user's tags, score every
/// item, and aggregate into a ranked city list.
///
/// `poi_pool` bounds how many of the best-scoring POIs feed the
/// aggregation; a generous pool gives each city enough members to group.
#[must_use]
pub fn recommend_cities(
    user_tags: &[CanonicalTag],
    items: &[VectorItem],
    blend: BlendWeights,
    city_weights: CityScoreWeights,
    poi_pool: usize,
) -> Vec<CityRecommendation> {
    let user_vector = vectorize(user_tags);
    let scored = recommend(&user_vector, items, blend, poi_pool);
    aggregate_by_city(&scored, city_weights)
}
