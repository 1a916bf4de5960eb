//! Seed loading and conversion into core city records.

use std::collections::HashSet;

use camino::Utf8Path;
use dalla_core::{City, Poi, TagNormalizer};
use geo::Coord;

use crate::error::DataError;
use crate::model::{SeedCity, SeedPoi};
use crate::rules::{TagCounts, derive_city_tags, is_coastal, is_flat_country, is_mountain_country};

/// Load the raw seed records from a JSON file.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or does not parse
/// as a seed array.
pub fn load_seed(path: &Utf8Path) -> Result<Vec<SeedCity>, DataError> {
    let text = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        DataError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert seed records into core cities, with cleaning and derived tags.
///
/// Per city: unnamed and duplicate-named POIs are dropped, and each
/// surviving POI keeps its raw categories so downstream consumers can
/// normalize them with their own strategy. City-level tags are derived
/// from the POI statistics and latitude, after filtering out tags the
/// geography makes implausible (no mountains in flat countries, ski
/// only in mountain countries, beaches only near a coast). City ids are
/// assigned in seed order.
#[must_use]
pub fn build_cities(seed: Vec<SeedCity>, normalizer: &dyn TagNormalizer) -> Vec<City> {
    seed.into_iter()
        .zip(1_u64..)
        .map(|(record, id)| build_city(id, record, normalizer))
        .collect()
}

/// Load a seed file and convert it in one call.
///
/// # Errors
/// Propagates [`DataError`] from [`load_seed`].
pub fn load_cities(path: &Utf8Path, normalizer: &dyn TagNormalizer) -> Result<Vec<City>, DataError> {
    Ok(build_cities(load_seed(path)?, normalizer))
}

fn build_city(id: u64, record: SeedCity, normalizer: &dyn TagNormalizer) -> City {
    let centre = Coord {
        x: record.lon,
        y: record.lat,
    };

    let mut seen_names: HashSet<String> = HashSet::new();
    let mut pois: Vec<Poi> = Vec::new();
    let mut dropped = 0_usize;
    for poi in record.pois {
        let name = poi.name.trim();
        if name.is_empty() || !seen_names.insert(name.to_owned()) {
            dropped += 1;
            continue;
        }
        pois.push(to_poi(&poi, centre));
    }
    if dropped > 0 {
        log::debug!(
            "city '{}': dropped {dropped} unnamed or duplicate POIs",
            record.city
        );
    }

    let counts = count_tags(&pois, &record.country, centre, normalizer);
    let city_tags = derive_city_tags(&counts, pois.len(), record.lat);

    City::new(id, record.city, record.country, centre)
        .with_pois(pois)
        .with_city_tags(city_tags)
}

fn to_poi(poi: &SeedPoi, centre: Coord<f64>) -> Poi {
    let location = Coord {
        x: poi.lon.unwrap_or(centre.x),
        y: poi.lat.unwrap_or(centre.y),
    };
    Poi::new(poi.name.trim(), location, poi.categories.clone())
}

/// Count normalized tag occurrences across POIs, skipping tags the
/// geography makes implausible so they cannot seed city-level tags.
fn count_tags(
    pois: &[Poi],
    country: &str,
    centre: Coord<f64>,
    normalizer: &dyn TagNormalizer,
) -> TagCounts {
    use dalla_core::CanonicalTag;

    let flat = is_flat_country(country);
    let alpine = is_mountain_country(country);
    let coastal = is_coastal(centre);
    let mut counts = TagCounts::new();
    for poi in pois {
        for tag in normalizer.normalize(&poi.categories) {
            if tag == CanonicalTag::Mountain && flat {
                continue;
            }
            if tag == CanonicalTag::Ski && !alpine {
                continue;
            }
            if tag == CanonicalTag::Beach && !coastal {
                continue;
            }
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}
