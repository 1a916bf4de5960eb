//! Heuristics deriving city-level tags from POI statistics and latitude.
//!
//! A city earns a tag either on a hard count of matching POIs or on a
//! softer count backed by a minimum share of the city's POIs, so small
//! and large cities are judged comparably. Geographic plausibility
//! filters remove tags the country or the distance to the coast makes
//! implausible.

use std::collections::HashMap;

use dalla_core::CanonicalTag;
use geo::{Coord, Distance, Haversine, Point};

/// Latitude at or above which a city counts as cold.
pub const COLD_LATITUDE: f64 = 50.0;
/// Latitude at or below which a city counts as warm.
pub const WARM_LATITUDE: f64 = 40.0;
/// Latitude at or below which a city additionally counts as tropical.
pub const TROPICAL_LATITUDE: f64 = 30.0;

/// Countries where mountain tags are implausible.
pub const FLAT_COUNTRIES: [&str; 3] = ["Belgium", "Netherlands", "Denmark"];
/// Countries where ski tags are plausible.
pub const MOUNTAIN_COUNTRIES: [&str; 5] = ["France", "Italy", "Austria", "Switzerland", "Spain"];

/// Maximum distance to a reference coastal point, in metres, for beach
/// POIs to be plausible.
pub const COASTAL_RADIUS_METRES: f64 = 50_000.0;

/// Reference coastal points across western Europe (lon/lat order).
pub const COAST_POINTS: [Coord<f64>; 15] = [
    // France
    Coord { x: 5.37, y: 43.30 },
    Coord { x: 7.01, y: 43.55 },
    Coord { x: -1.56, y: 48.86 },
    // Portugal
    Coord { x: -9.13, y: 38.72 },
    Coord { x: -8.62, y: 41.15 },
    Coord { x: -8.98, y: 37.02 },
    // Spain
    Coord { x: -2.47, y: 36.83 },
    Coord { x: -8.41, y: 43.36 },
    Coord { x: -0.38, y: 39.47 },
    Coord { x: 2.17, y: 41.38 },
    // Italy
    Coord { x: 8.93, y: 44.41 },
    Coord { x: 14.27, y: 40.85 },
    Coord { x: 12.33, y: 45.44 },
    // Germany
    Coord { x: 9.99, y: 53.55 },
    // United Kingdom
    Coord { x: -0.14, y: 50.82 },
];

const MUSEUM_HARD: usize = 5;
const HISTORICAL_HARD: usize = 5;
const CULTURE_SOFT: usize = 2;
const CULTURE_SHARE: f32 = 0.05;
const ART_MIN_EACH: usize = 3;
const PARK_MIN: usize = 3;
const PARK_SHARE: f32 = 0.05;
const BEACH_MIN: usize = 2;
const MOUNTAIN_MIN: usize = 2;
const SKI_MIN: usize = 1;
const HIKING_MIN: usize = 2;
const RESTAURANT_HARD: usize = 10;
const RESTAURANT_SHARE: f32 = 0.15;
const CAFE_HARD: usize = 5;
const CAFE_SHARE: f32 = 0.08;
const VEGAN_MIN: usize = 3;
const SHOPPING_MALL_MIN: usize = 2;
const SHOPPING_SHOP_MIN: usize = 5;
const SHOPPING_MARKET_MIN: usize = 4;
const MALL_MIN: usize = 1;
const COMFORT_HARD: usize = 5;
const COMFORT_SHARE: f32 = 0.08;
const FAMILY_PARK_MIN: usize = 3;
const FAMILY_MUSEUM_MIN: usize = 2;

/// Tag occurrence counts across a city's POIs.
pub type TagCounts = HashMap<CanonicalTag, usize>;

/// Whether `country` makes the mountain tag implausible.
#[must_use]
pub fn is_flat_country(country: &str) -> bool {
    FLAT_COUNTRIES.contains(&country)
}

/// Whether `country` makes ski POIs plausible.
#[must_use]
pub fn is_mountain_country(country: &str) -> bool {
    MOUNTAIN_COUNTRIES.contains(&country)
}

/// Whether `location` lies within [`COASTAL_RADIUS_METRES`] of a
/// reference coastal point, making beach POIs plausible.
#[must_use]
pub fn is_coastal(location: Coord<f64>) -> bool {
    let here = Point::from(location);
    COAST_POINTS
        .iter()
        .any(|coast| Haversine.distance(here, Point::from(*coast)) < COASTAL_RADIUS_METRES)
}

/// Climate tags inferred from the city's latitude.
#[must_use]
pub fn climate_tags(lat: f64) -> Vec<CanonicalTag> {
    let mut tags = Vec::new();
    if lat >= COLD_LATITUDE {
        tags.push(CanonicalTag::Cold);
    } else if lat <= WARM_LATITUDE {
        tags.push(CanonicalTag::Warm);
    }
    if lat <= TROPICAL_LATITUDE {
        tags.push(CanonicalTag::Tropical);
    }
    tags
}

/// Derive city-level tags from POI tag counts plus climate.
///
/// The result is emitted in canonical vocabulary order, so identical
/// inputs always yield identical tag lists.
#[must_use]
#[expect(
    clippy::implicit_hasher,
    reason = "counts come from this crate's own ingestion; hasher choice is irrelevant"
)]
#[expect(
    clippy::cognitive_complexity,
    reason = "one flat rule table reads better than sixteen single-use helpers"
)]
pub fn derive_city_tags(counts: &TagCounts, total_pois: usize, lat: f64) -> Vec<CanonicalTag> {
    let climate = climate_tags(lat);
    let count = |tag: CanonicalTag| counts.get(&tag).copied().unwrap_or(0);

    let museum = count(CanonicalTag::Museum);
    let historical = count(CanonicalTag::Historical);
    let park = count(CanonicalTag::Park);

    let earned = |tag: CanonicalTag| -> bool {
        match tag {
            CanonicalTag::Museum => {
                museum >= MUSEUM_HARD
                    || (museum >= CULTURE_SOFT && meets_share(museum, total_pois, CULTURE_SHARE))
            }
            CanonicalTag::Historical => {
                historical >= HISTORICAL_HARD
                    || (historical >= CULTURE_SOFT
                        && meets_share(historical, total_pois, CULTURE_SHARE))
            }
            CanonicalTag::Art => museum >= ART_MIN_EACH && historical >= ART_MIN_EACH,
            CanonicalTag::Park => {
                park >= PARK_MIN && meets_share(park, total_pois, PARK_SHARE)
            }
            CanonicalTag::Beach => count(CanonicalTag::Beach) >= BEACH_MIN,
            CanonicalTag::Mountain => {
                count(CanonicalTag::Mountain) >= MOUNTAIN_MIN
                    || count(CanonicalTag::Ski) >= SKI_MIN
            }
            CanonicalTag::Hiking => count(CanonicalTag::Hiking) >= HIKING_MIN,
            CanonicalTag::Restaurant => {
                let restaurants = count(CanonicalTag::Restaurant);
                restaurants >= RESTAURANT_HARD
                    || meets_share(restaurants, total_pois, RESTAURANT_SHARE)
            }
            CanonicalTag::Cafe => {
                let cafes = count(CanonicalTag::Cafe);
                cafes >= CAFE_HARD || meets_share(cafes, total_pois, CAFE_SHARE)
            }
            CanonicalTag::Vegan => count(CanonicalTag::Vegan) >= VEGAN_MIN,
            CanonicalTag::Shopping => {
                count(CanonicalTag::Mall) >= SHOPPING_MALL_MIN
                    || count(CanonicalTag::Shopping) >= SHOPPING_SHOP_MIN
                    || count(CanonicalTag::Market) >= SHOPPING_MARKET_MIN
            }
            CanonicalTag::Mall => count(CanonicalTag::Mall) >= MALL_MIN,
            CanonicalTag::Wifi => {
                let wifi = count(CanonicalTag::Wifi);
                wifi >= COMFORT_HARD || meets_share(wifi, total_pois, COMFORT_SHARE)
            }
            CanonicalTag::Accessible => {
                let accessible = count(CanonicalTag::Accessible);
                accessible >= COMFORT_HARD
                    || meets_share(accessible, total_pois, COMFORT_SHARE)
            }
            CanonicalTag::FamilyFriendly => {
                park >= FAMILY_PARK_MIN && museum >= FAMILY_MUSEUM_MIN
            }
            CanonicalTag::Cold | CanonicalTag::Warm | CanonicalTag::Tropical => {
                climate.contains(&tag)
            }
            _ => false,
        }
    };

    CanonicalTag::ALL.into_iter().filter(|tag| earned(*tag)).collect()
}

/// Whether `count` POIs out of `total` reach the given share.
#[expect(
    clippy::cast_precision_loss,
    reason = "POI counts are far below f32 precision limits"
)]
#[expect(clippy::float_arithmetic, reason = "share thresholds are ratios")]
fn meets_share(count: usize, total: usize, share: f32) -> bool {
    if total == 0 {
        return false;
    }
    (count as f32) / (total as f32) >= share
}
