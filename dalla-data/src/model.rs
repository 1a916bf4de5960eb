//! Serde model of the seed file.
//!
//! The seed is a JSON array of cities, each carrying its POIs inline.
//! All fields beyond the basics are optional so older seed revisions
//! still load.

use serde::Deserialize;

/// One city record as it appears in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCity {
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Latitude of the city centre.
    pub lat: f64,
    /// Longitude of the city centre.
    pub lon: f64,
    /// Pre-assigned city-level tags, when a previous pipeline stage
    /// already derived them.
    #[serde(default)]
    pub city_tags: Vec<String>,
    /// Points of interest collected for the city.
    #[serde(default)]
    pub pois: Vec<SeedPoi>,
}

/// One POI record inside a seed city.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPoi {
    /// Display name; unnamed POIs are dropped during conversion.
    #[serde(default)]
    pub name: String,
    /// Latitude, defaulting to the city centre when absent.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, defaulting to the city centre when absent.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Raw hierarchical category tags.
    #[serde(default)]
    pub categories: Vec<String>,
}
