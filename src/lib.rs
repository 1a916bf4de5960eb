//! Facade crate for the Dalla travel recommendation engine.
//!
//! Re-exports the shared domain types, the query sentence builders, the
//! embedding-based ranker, and the manual tag-vector engine. Seed
//! ingestion is available behind the `ingest` feature (on by default).
//!
//! The two pipelines compose like this:
//!
//! 1. normalize raw preference tags ([`ExactTagNormalizer`] or
//!    [`PatternTagNormalizer`]);
//! 2. either build a query sentence ([`build_query_text`]), embed it
//!    through an [`EmbeddingGateway`], and rank with [`rank_cities`];
//! 3. or vectorize tags directly ([`vectorize`]) and run the manual
//!    engine ([`recommend`], [`aggregate_by_city`]).

#![forbid(unsafe_code)]

pub use dalla_core::{
    CanonicalTag, City, DEFAULT_WEIGHT, Embedding, EmbeddingError, EmbeddingGateway,
    ExactTagNormalizer, NormalizeReport, PatternError, PatternTagNormalizer, Poi,
    PreferenceInput, TagNormalizer, WeightedPreferences, vector,
};

pub use dalla_query::{Theme, build_query_text, build_query_text_weighted};

pub use dalla_ranker::{
    CityEmbedding, EmbedOutcome, NoPenalty, PenaltyPolicy, PenaltyStrategy, RankError, RankedCity,
    TagPenalty, embed_cities, rank_cities, rank_cities_by_text, read_embeddings_file, tag_penalty,
    user_vector, write_embeddings_file, write_ranking_json,
};

pub use dalla_vector::{
    BlendWeights, CityRecommendation, CityScoreWeights, VectorItem, aggregate_by_city, build_items,
    recommend, recommend_cities, vectorize,
};

#[cfg(feature = "ingest")]
pub use dalla_data::{DataError, SeedCity, SeedPoi, build_cities, load_cities, load_seed};
