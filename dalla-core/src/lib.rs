//! Core domain types for the Dalla travel recommendation engine.
//!
//! The crate owns everything the two ranking pipelines share:
//! - the canonical tag taxonomy all raw source tags are reduced into;
//! - the exact-map and pattern-based tag normalizers;
//! - city and point-of-interest records;
//! - weighted user preferences with a single clamping policy;
//! - the embedding gateway contract and its error type;
//! - plain vector maths with documented degenerate cases.
//!
//! Nothing here performs I/O; ingestion and artifact persistence live in the
//! sibling crates.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod city;
mod embedding;
mod normalize;
mod preferences;
mod taxonomy;
pub mod vector;

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use city::{City, Poi};
pub use embedding::{Embedding, EmbeddingError, EmbeddingGateway};
pub use normalize::{
    ExactTagNormalizer, NormalizeReport, PatternError, PatternTagNormalizer, TagNormalizer,
};
pub use preferences::{DEFAULT_WEIGHT, PreferenceInput, WeightedPreferences};
pub use taxonomy::CanonicalTag;
