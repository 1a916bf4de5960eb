//! Folds POI-level scores into one score per city.

use dalla_core::CanonicalTag;
use serde::Serialize;
use thiserror::Error;

use crate::recommend::VectorItem;

/// Cities whose best POI scores below this are dropped as irrelevant.
pub const DEFAULT_RELEVANCE_FLOOR: f32 = 0.05;
/// Rough normaliser for the distinct-tag diversity bonus.
pub const DEFAULT_DIVERSITY_SCALE: f32 = 20.0;
/// How many of a city's best POIs feed the mean component.
pub const DEFAULT_TOP_POIS: usize = 3;

/// A configured aggregation weight was unusable.
#[derive(Debug, Error)]
#[error("aggregation weight '{name}' is invalid: {value}")]
pub struct InvalidCityScoreWeight {
    /// Name of the offending field.
    pub name: &'static str,
    /// Rejected value.
    pub value: f32,
}

/// Tuning knobs for the per-city score.
///
/// The best POI dominates: one genuinely relevant place makes a city
/// worth showing. The mean over the top POIs rewards depth, and the
/// diversity bonus nudges cities whose matches span distinct tags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityScoreWeights {
    /// Multiplier for the best POI score.
    pub max_weight: f32,
    /// Multiplier for the mean of the top POI scores.
    pub mean_weight: f32,
    /// Multiplier for the diversity bonus.
    pub diversity_weight: f32,
    /// Best-POI threshold below which a city is dropped entirely.
    pub relevance_floor: f32,
    /// Divisor turning a distinct-tag count into the diversity bonus.
    pub diversity_scale: f32,
    /// Number of best POIs contributing to the mean component.
    pub top_pois: usize,
}

impl Default for CityScoreWeights {
    fn default() -> Self {
        Self {
            max_weight: 0.6,
            mean_weight: 0.3,
            diversity_weight: 0.1,
            relevance_floor: DEFAULT_RELEVANCE_FLOOR,
            diversity_scale: DEFAULT_DIVERSITY_SCALE,
            top_pois: DEFAULT_TOP_POIS,
        }
    }
}

impl CityScoreWeights {
    /// Check that every knob is finite, non-negative, and usable.
    ///
    /// # Errors
    /// Returns [`InvalidCityScoreWeight`] naming the first offending
    /// field; `diversity_scale` must additionally be non-zero and
    /// `top_pois` at least one.
    pub fn validate(&self) -> Result<(), InvalidCityScoreWeight> {
        let fields = [
            ("max_weight", self.max_weight),
            ("mean_weight", self.mean_weight),
            ("diversity_weight", self.diversity_weight),
            ("relevance_floor", self.relevance_floor),
            ("diversity_scale", self.diversity_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidCityScoreWeight { name, value });
            }
        }
        if self.diversity_scale == 0.0 {
            return Err(InvalidCityScoreWeight {
                name: "diversity_scale",
                value: self.diversity_scale,
            });
        }
        if self.top_pois == 0 {
            return Err(InvalidCityScoreWeight {
                name: "top_pois",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// One city in the aggregated recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRecommendation {
    /// City name.
    pub city: String,
    /// Country of the city.
    pub country: String,
    /// Blended city score; higher is better.
    pub score: f32,
    /// Distinct canonical tags seen across the city's scored POIs, in
    /// first-occurrence order.
    pub tags: Vec<CanonicalTag>,
}

/// Aggregate POI-level recommendations into one ranked list of cities.
///
/// Items are grouped by city in first-seen order. A city whose best POI
/// scores below the relevance floor is dropped; a best score exactly at
/// the floor keeps the city. The remaining cities score as
/// `max_weight x best + mean_weight x mean(top POIs) + diversity_weight x
/// (distinct tags / diversity_scale)` and are sorted descending with
/// stable tie-breaks.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "score blending is arithmetic")]
pub fn aggregate_by_city(
    scored: &[(&VectorItem, f32)],
    weights: CityScoreWeights,
) -> Vec<CityRecommendation> {
    let mut order: Vec<&str> = Vec::new();
    for (item, _) in scored {
        if !order.contains(&item.city.as_str()) {
            order.push(item.city.as_str());
        }
    }

    let mut results: Vec<CityRecommendation> = order
        .iter()
        .filter_map(|city| {
            let group: Vec<&(&VectorItem, f32)> = scored
                .iter()
                .filter(|(item, _)| item.city == *city)
                .collect();
            score_city(&group, weights)
        })
        .collect();
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

#[expect(clippy::float_arithmetic, reason = "score blending is arithmetic")]
fn score_city(
    group: &[&(&VectorItem, f32)],
    weights: CityScoreWeights,
) -> Option<CityRecommendation> {
    let first = group.first()?;
    let mut top: Vec<f32> = group.iter().map(|(_, score)| *score).collect();
    top.sort_by(|a, b| b.total_cmp(a));
    top.truncate(weights.top_pois);

    let best = top.first().copied()?;
    if best < weights.relevance_floor {
        log::debug!(
            "dropping city '{}': best POI score {best} is below the relevance floor",
            first.0.city
        );
        return None;
    }
    let mean = top.iter().sum::<f32>() / small_count(top.len());

    let mut tags: Vec<CanonicalTag> = Vec::new();
    for (item, _) in group.iter().copied() {
        for tag in &item.tags {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
    }
    let diversity = small_count(tags.len()) / weights.diversity_scale;

    Some(CityRecommendation {
        city: first.0.city.clone(),
        country: first.0.country.clone(),
        score: weights.max_weight * best
            + weights.mean_weight * mean
            + weights.diversity_weight * diversity,
        tags,
    })
}

/// Lossless small-count conversion; the counts here are bounded by the
/// top-POI limit and the vocabulary size.
fn small_count(count: usize) -> f32 {
    f32::from(u16::try_from(count).unwrap_or(u16::MAX))
}
