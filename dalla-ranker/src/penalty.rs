//! Additive penalties for disliked attributes.
//!
//! This is the second, independent dislike mechanism: where
//! [`user_vector`](crate::user_vector) pushes the preference vector away
//! from dislikes in embedding space, a [`PenaltyStrategy`] subtracts an
//! explicit amount from the similarity score of each city that exhibits a
//! disliked tag. Both can be active in the same ranking call.

use std::collections::HashSet;

use dalla_core::{City, WeightedPreferences};

/// Penalty subtracted per dislike-weight point when a disliked tag is
/// present.
pub const DEFAULT_PENALTY_PER_WEIGHT_POINT: f32 = 0.05;

/// Tuning knobs for the tag penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyPolicy {
    /// Amount subtracted per weight point of a matching disliked tag.
    pub per_weight_point: f32,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self {
            per_weight_point: DEFAULT_PENALTY_PER_WEIGHT_POINT,
        }
    }
}

/// Compute the penalty a city incurs for exhibiting disliked tags.
pub trait PenaltyStrategy: Send + Sync {
    /// Penalty to subtract from the city's similarity score.
    fn penalty(&self, city: &City) -> f32;
}

/// Applies no penalty; ranking degrades to pure similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPenalty;

impl PenaltyStrategy for NoPenalty {
    fn penalty(&self, _city: &City) -> f32 {
        0.0
    }
}

/// Penalises each disliked tag present anywhere in the city.
///
/// A tag counts as present when it appears among the city's own canonical
/// tags or in any of its points of interest.
#[derive(Debug, Clone, Default)]
pub struct TagPenalty {
    dislikes: WeightedPreferences,
    policy: PenaltyPolicy,
}

impl TagPenalty {
    /// Build the strategy from dislike weights and a policy.
    #[must_use]
    pub const fn new(dislikes: WeightedPreferences, policy: PenaltyPolicy) -> Self {
        Self { dislikes, policy }
    }
}

impl PenaltyStrategy for TagPenalty {
    fn penalty(&self, city: &City) -> f32 {
        let mut present: HashSet<&str> = city
            .pois
            .iter()
            .flat_map(|poi| poi.categories.iter().map(String::as_str))
            .collect();
        present.extend(city.tag_names());
        let tags: Vec<String> = present.iter().map(|tag| (*tag).to_owned()).collect();
        tag_penalty(&tags, &self.dislikes, self.policy)
    }
}

/// Penalty for a flat tag list: the sum over disliked tags present of
/// `per_weight_point x weight`.
///
/// Absent tags contribute nothing; an empty tag list or empty dislikes
/// yield `0.0`.
///
/// # Examples
/// ```
/// use dalla_core::WeightedPreferences;
/// use dalla_ranker::{PenaltyPolicy, tag_penalty};
///
/// let dislikes = WeightedPreferences::new()
///     .with("adult.nightclub", 5)
///     .with("parking", 2);
/// let tags = vec!["adult.nightclub".to_owned(), "museum".to_owned()];
/// let penalty = tag_penalty(&tags, &dislikes, PenaltyPolicy::default());
/// assert!((penalty - 0.25).abs() < 1e-6);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "penalty accumulation is arithmetic")]
pub fn tag_penalty(
    city_tags: &[String],
    dislikes: &WeightedPreferences,
    policy: PenaltyPolicy,
) -> f32 {
    if city_tags.is_empty() || dislikes.is_empty() {
        return 0.0;
    }
    let present: HashSet<&str> = city_tags.iter().map(String::as_str).collect();
    dislikes
        .iter()
        .filter(|(tag, _)| present.contains(tag))
        .map(|(_, weight)| policy.per_weight_point * f32::from(weight))
        .sum()
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_arithmetic, reason = "assertions compare float penalties")]

    use dalla_core::WeightedPreferences;
    use rstest::rstest;

    use super::{PenaltyPolicy, tag_penalty};

    const TOLERANCE: f32 = 1e-6;

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|tag| (*tag).to_owned()).collect()
    }

    #[rstest]
    fn one_matching_dislike_scales_with_its_weight() {
        let dislikes = WeightedPreferences::new()
            .with("adult.nightclub", 5)
            .with("parking", 2);
        let city = tags(&["adult.nightclub", "museum", "heritage.unesco"]);
        let penalty = tag_penalty(&city, &dislikes, PenaltyPolicy::default());
        assert!((penalty - 0.25).abs() < TOLERANCE);
    }

    #[rstest]
    fn multiple_matches_accumulate() {
        let dislikes = WeightedPreferences::new()
            .with("adult.nightclub", 5)
            .with("parking", 2)
            .with("industrial", 4);
        let city = tags(&["adult.nightclub", "parking", "industrial", "museum"]);
        let penalty = tag_penalty(&city, &dislikes, PenaltyPolicy::default());
        assert!((penalty - 0.55).abs() < TOLERANCE);
    }

    #[rstest]
    fn absent_dislikes_contribute_nothing() {
        let dislikes = WeightedPreferences::new().with("parking", 5);
        let city = tags(&["museum", "beach"]);
        assert!(tag_penalty(&city, &dislikes, PenaltyPolicy::default()).abs() < TOLERANCE);
    }

    #[rstest]
    fn empty_inputs_yield_zero() {
        let dislikes = WeightedPreferences::new().with("parking", 5);
        assert!(tag_penalty(&[], &dislikes, PenaltyPolicy::default()).abs() < TOLERANCE);
        let city = tags(&["parking"]);
        let none = WeightedPreferences::new();
        assert!(tag_penalty(&city, &none, PenaltyPolicy::default()).abs() < TOLERANCE);
    }

    #[rstest]
    fn policy_scale_is_honoured() {
        let dislikes = WeightedPreferences::new().with("parking", 4);
        let city = tags(&["parking"]);
        let policy = PenaltyPolicy {
            per_weight_point: 0.1,
        };
        let penalty = tag_penalty(&city, &dislikes, policy);
        assert!((penalty - 0.4).abs() < TOLERANCE);
    }
}
