//! End-to-end behaviour of the query sentence builders.

use dalla_core::WeightedPreferences;
use dalla_query::{build_query_text, build_query_text_weighted};

fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| (*tag).to_owned()).collect()
}

fn sample_profile() -> Vec<String> {
    owned(&[
        "accommodation",
        "accommodation.hotel",
        "building",
        "building.historic",
        "catering",
        "catering.cafe.coffee_shop",
        "catering.restaurant",
        "catering.restaurant.arab",
        "catering.restaurant.international",
        "catering.restaurant.regional",
        "entertainment.museum",
        "heritage",
        "heritage.unesco",
        "highway.footway",
        "internet_access.free",
        "memorial.cemetery",
        "tourism.attraction",
        "tourism.sights.archaeological_site",
        "tourism.sights.ruines",
        "wheelchair",
        "ski",
    ])
}

#[test]
fn a_full_profile_reads_as_one_sentence() {
    let sentence = build_query_text(&sample_profile());
    assert!(sentence.starts_with("A destination featuring "));
    assert!(sentence.ends_with('.'));
    assert!(sentence.contains("historical heritage"));
    assert!(sentence.contains("landmarks like archaeological site and ruines"));
    assert!(sentence.contains("restaurants serving arab and international cuisine"));
    assert!(sentence.contains("skiing"));
}

#[test]
fn at_most_three_themes_survive_even_when_more_match() {
    let mut tags = sample_profile();
    tags.push("beach".to_owned());
    tags.push("commercial.marketplace".to_owned());
    let sentence = build_query_text(&tags);
    // Five themes match; nature, history, and gastronomy win on stable order.
    assert!(sentence.contains("beautiful landscapes like beach"));
    assert!(sentence.contains("historical heritage"));
    assert!(!sentence.contains("skiing"));
    assert!(!sentence.contains("marketplaces"));
}

#[test]
fn weights_reorder_themes_by_intensity() {
    let weights = WeightedPreferences::new().with("ski", 5).with("heritage", 1);
    let sentence = build_query_text_weighted(&sample_profile(), &weights);
    assert!(sentence.starts_with("A destination featuring skiing as a top priority"));
}

#[test]
fn weighted_and_unweighted_agree_when_no_weights_given() {
    let tags = sample_profile();
    assert_eq!(
        build_query_text_weighted(&tags, &WeightedPreferences::new()),
        build_query_text(&tags)
    );
}

#[test]
fn blank_and_duplicate_tags_do_not_change_the_sentence() {
    let mut noisy = sample_profile();
    noisy.push("  ".to_owned());
    noisy.push("heritage".to_owned());
    assert_eq!(build_query_text(&noisy), build_query_text(&sample_profile()));
}
