//! Weighted user preferences.
//!
//! Both ranking pipelines accept a map from tag to an intensity weight in
//! `1..=5`. Historically, callers passed plain maps or pair lists with
//! different implicit defaults; the [`PreferenceInput`] union and the single
//! [`DEFAULT_WEIGHT`] replace that with one documented policy: out-of-range
//! weights clamp silently, blank tags are skipped, and a tag mentioned
//! without a weight counts as neutral (3).

use std::collections::{BTreeMap, HashMap};

/// Weight assigned when a tag is referenced without an explicit value.
pub const DEFAULT_WEIGHT: u8 = 3;

const MIN_WEIGHT: i32 = 1;
const MAX_WEIGHT: i32 = 5;

/// Accepted shapes for raw preference input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceInput {
    /// Tag-to-weight map.
    Map(HashMap<String, i32>),
    /// Ordered `(tag, weight)` pairs; later duplicates win.
    Pairs(Vec<(String, i32)>),
}

/// A normalised set of tag weights, each clamped into `1..=5`.
///
/// # Examples
/// ```
/// use dalla_core::WeightedPreferences;
///
/// let prefs = WeightedPreferences::new()
///     .with("beach", 9)
///     .with("heritage.unesco", 3);
/// assert_eq!(prefs.weight("beach"), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeightedPreferences {
    weights: BTreeMap<String, u8>,
}

impl WeightedPreferences {
    /// Construct an empty preference set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Normalise raw input into a canonical preference set.
    ///
    /// # Examples
    /// ```
    /// use dalla_core::{PreferenceInput, WeightedPreferences};
    ///
    /// let input = PreferenceInput::Pairs(vec![("ski".to_owned(), 12)]);
    /// let prefs = WeightedPreferences::from_input(input);
    /// assert_eq!(prefs.weight("ski"), Some(5));
    /// ```
    #[must_use]
    pub fn from_input(input: PreferenceInput) -> Self {
        let mut prefs = Self::new();
        match input {
            PreferenceInput::Map(map) => {
                for (tag, weight) in map {
                    prefs.set(&tag, weight);
                }
            }
            PreferenceInput::Pairs(pairs) => {
                for (tag, weight) in pairs {
                    prefs.set(&tag, weight);
                }
            }
        }
        prefs
    }

    /// Insert or update a tag weight, clamping into `1..=5`.
    ///
    /// Blank tags are skipped.
    pub fn set(&mut self, tag: &str, weight: i32) {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return;
        }
        self.weights.insert(trimmed.to_owned(), clamp_weight(weight));
    }

    /// Insert a tag weight while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, tag: &str, weight: i32) -> Self {
        self.set(tag, weight);
        self
    }

    /// Return the clamped weight for a tag, if present.
    #[must_use]
    pub fn weight(&self, tag: &str) -> Option<u8> {
        self.weights.get(tag).copied()
    }

    /// Return the weight for a tag, falling back to [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn weight_or_default(&self, tag: &str) -> u8 {
        self.weight(tag).unwrap_or(DEFAULT_WEIGHT)
    }

    /// Report whether no weights are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of weighted tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Iterate over `(tag, weight)` entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.weights
            .iter()
            .map(|(tag, weight)| (tag.as_str(), *weight))
    }
}

#[expect(
    clippy::implicit_hasher,
    reason = "callers hand over plain maps; hasher choice is irrelevant here"
)]
impl From<HashMap<String, i32>> for WeightedPreferences {
    fn from(map: HashMap<String, i32>) -> Self {
        Self::from_input(PreferenceInput::Map(map))
    }
}

fn clamp_weight(weight: i32) -> u8 {
    // Clamped into 1..=5, so the conversion cannot truncate.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped into 1..=5 before conversion"
    )]
    let clamped = weight.clamp(MIN_WEIGHT, MAX_WEIGHT) as u8;
    clamped
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::{DEFAULT_WEIGHT, PreferenceInput, WeightedPreferences};

    #[rstest]
    #[case(-3, 1)]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(42, 5)]
    fn weights_clamp_into_range(#[case] raw: i32, #[case] expected: u8) {
        let prefs = WeightedPreferences::new().with("beach", raw);
        assert_eq!(prefs.weight("beach"), Some(expected));
    }

    #[rstest]
    fn blank_tags_are_skipped() {
        let prefs = WeightedPreferences::new().with("  ", 4);
        assert!(prefs.is_empty());
    }

    #[rstest]
    fn map_and_pairs_normalise_identically() {
        let map = HashMap::from([("ski".to_owned(), 2), ("beach".to_owned(), 7)]);
        let pairs = vec![("ski".to_owned(), 2), ("beach".to_owned(), 7)];

        let from_map = WeightedPreferences::from_input(PreferenceInput::Map(map));
        let from_pairs = WeightedPreferences::from_input(PreferenceInput::Pairs(pairs));

        assert_eq!(from_map, from_pairs);
        assert_eq!(from_map.weight("beach"), Some(5));
    }

    #[rstest]
    fn later_pair_duplicates_win() {
        let pairs = vec![("museum".to_owned(), 1), ("museum".to_owned(), 4)];
        let prefs = WeightedPreferences::from_input(PreferenceInput::Pairs(pairs));
        assert_eq!(prefs.weight("museum"), Some(4));
    }

    #[rstest]
    fn missing_tags_fall_back_to_the_neutral_default() {
        let prefs = WeightedPreferences::new().with("beach", 5);
        assert_eq!(prefs.weight_or_default("museum"), DEFAULT_WEIGHT);
    }
}
