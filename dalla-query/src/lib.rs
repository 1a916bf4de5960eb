//! Turns sparse preference tags into the query sentence fed to the
//! embedding model.
//!
//! Raw hierarchical tags such as `catering.restaurant.french` or
//! `tourism.sights.archaeological_site` carry little lexical overlap with
//! prose city descriptions, so embedding them directly ranks poorly. This
//! crate rewrites them into a short English sentence built from the same
//! five-theme vocabulary the city descriptions use, with optional weighted
//! emphasis per theme.
//!
//! The builders are pure functions: identical tags and weights always
//! produce an identical sentence.

#![forbid(unsafe_code)]

mod builder;
mod phrase;
mod theme;

pub use builder::{build_query_text, build_query_text_weighted};
pub use theme::Theme;
