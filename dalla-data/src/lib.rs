//! Seed ingestion for the Dalla engine.
//!
//! Loads the JSON seed of cities and POIs, cleans it (unnamed and
//! duplicate POIs, geographically implausible tags), derives city-level
//! tags from POI statistics and latitude, and hands back core
//! [`City`](dalla_core::City) records ready for either ranking pipeline.

#![forbid(unsafe_code)]

mod error;
mod load;
mod model;
mod rules;

pub use error::DataError;
pub use load::{build_cities, load_cities, load_seed};
pub use model::{SeedCity, SeedPoi};
pub use rules::{
    COAST_POINTS, COASTAL_RADIUS_METRES, COLD_LATITUDE, FLAT_COUNTRIES, MOUNTAIN_COUNTRIES,
    TROPICAL_LATITUDE, TagCounts, WARM_LATITUDE, climate_tags, derive_city_tags, is_coastal,
    is_flat_country, is_mountain_country,
};
