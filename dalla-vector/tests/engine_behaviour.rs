//! End-to-end behaviour of the manual recommendation engine.
#![expect(clippy::expect_used, reason = "tests fail fast on fixture errors")]
#![expect(clippy::indexing_slicing, reason = "fixture sizes are fixed")]

use dalla_core::{CanonicalTag, City, PatternTagNormalizer, Poi};
use dalla_vector::{BlendWeights, CityScoreWeights, build_items, recommend_cities};
use geo::Coord;

fn poi(name: &str, categories: &[&str]) -> Poi {
    Poi::new(
        name,
        Coord { x: 0.0, y: 0.0 },
        categories.iter().map(|c| (*c).to_owned()).collect(),
    )
}

fn seaside_city() -> City {
    City::new(1, "Nice", "France", Coord { x: 7.27, y: 43.70 })
        .with_pois(vec![
            poi("Plage de la Promenade", &["beach"]),
            poi("Le Petit Nicois", &["catering.restaurant.regional"]),
            poi("Vieux Nice", &["tourism.sights.castle"]),
        ])
        .with_city_tags(vec![CanonicalTag::Beach, CanonicalTag::Warm])
}

fn alpine_city() -> City {
    City::new(2, "Chamonix", "France", Coord { x: 6.87, y: 45.92 })
        .with_pois(vec![
            poi("Sentier des Gaillands", &["sport.hiking"]),
            poi("Telecabine", &["mountain"]),
        ])
        .with_city_tags(vec![CanonicalTag::Mountain, CanonicalTag::Cold])
}

#[test]
fn beach_profiles_prefer_seaside_cities() {
    let normalizer = PatternTagNormalizer::new().expect("rule tables compile");
    let items = build_items(&[seaside_city(), alpine_city()], &normalizer);
    assert_eq!(items.len(), 5);

    let ranking = recommend_cities(
        &[CanonicalTag::Beach, CanonicalTag::Restaurant, CanonicalTag::Tropical],
        &items,
        BlendWeights::default(),
        CityScoreWeights::default(),
        300,
    );
    assert_eq!(ranking[0].city, "Nice");
    assert!(ranking[0].tags.contains(&CanonicalTag::Beach));
}

#[test]
fn mountain_profiles_prefer_alpine_cities() {
    let normalizer = PatternTagNormalizer::new().expect("rule tables compile");
    let items = build_items(&[seaside_city(), alpine_city()], &normalizer);

    let ranking = recommend_cities(
        &[CanonicalTag::Mountain, CanonicalTag::Hiking, CanonicalTag::Cold],
        &items,
        BlendWeights::default(),
        CityScoreWeights::default(),
        300,
    );
    assert_eq!(ranking[0].city, "Chamonix");
}

#[test]
fn unrelated_profiles_can_return_no_cities() {
    let normalizer = PatternTagNormalizer::new().expect("rule tables compile");
    let items = build_items(&[seaside_city()], &normalizer);

    let ranking = recommend_cities(
        &[CanonicalTag::Ski],
        &items,
        BlendWeights::default(),
        CityScoreWeights::default(),
        300,
    );
    assert!(ranking.is_empty());
}
