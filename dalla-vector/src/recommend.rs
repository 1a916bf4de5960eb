//! POI-level scoring against a user tag vector.

use dalla_core::vector::dot;
use dalla_core::{CanonicalTag, City, TagNormalizer};
use serde::Serialize;
use thiserror::Error;

use crate::vectorize::vectorize;

/// Default weight of the POI similarity signal.
pub const DEFAULT_POI_WEIGHT: f32 = 0.7;
/// Default weight of the city-context similarity signal.
pub const DEFAULT_CITY_WEIGHT: f32 = 0.3;

/// A configured blend weight was unusable.
#[derive(Debug, Error)]
#[error("blend weight '{name}' is invalid: {value}")]
pub struct InvalidBlendWeight {
    /// Name of the offending field.
    pub name: &'static str,
    /// Rejected value.
    pub value: f32,
}

/// Relative influence of POI detail versus city context.
///
/// POI similarity dominates because it reflects what the user will
/// actually visit; the city vector adds the broader setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendWeights {
    /// Multiplier for the POI similarity.
    pub poi: f32,
    /// Multiplier for the city similarity.
    pub city: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            poi: DEFAULT_POI_WEIGHT,
            city: DEFAULT_CITY_WEIGHT,
        }
    }
}

impl BlendWeights {
    /// Check that both weights are finite and non-negative.
    ///
    /// # Errors
    /// Returns [`InvalidBlendWeight`] naming the first offending field.
    pub fn validate(&self) -> Result<(), InvalidBlendWeight> {
        for (name, value) in [("poi", self.poi), ("city", self.city)] {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidBlendWeight { name, value });
            }
        }
        Ok(())
    }
}

/// One POI prepared for vector scoring, with its city context attached.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorItem {
    /// City the POI belongs to.
    pub city: String,
    /// Country of that city.
    pub country: String,
    /// Name of the POI.
    pub name: String,
    /// Canonical tags mapped from the POI's raw categories.
    pub tags: Vec<CanonicalTag>,
    /// Normalised weighted vector of the POI tags.
    pub poi_vector: Vec<f32>,
    /// Normalised weighted vector of the city-level tags.
    pub city_vector: Vec<f32>,
}

/// Flatten cities into scoreable items, one per POI.
///
/// Raw POI categories are reduced through `normalizer`; city-level tags
/// are already canonical and vectorized directly. Cities without POIs
/// contribute no items.
#[must_use]
pub fn build_items(cities: &[City], normalizer: &dyn TagNormalizer) -> Vec<VectorItem> {
    cities
        .iter()
        .flat_map(|city| {
            let city_vector = vectorize(&city.city_tags);
            city.pois.iter().map(move |poi| {
                let tags = normalizer.normalize(&poi.categories);
                let poi_vector = vectorize(&tags);
                VectorItem {
                    city: city.name.clone(),
                    country: city.country.clone(),
                    name: poi.name.clone(),
                    tags,
                    poi_vector,
                    city_vector: city_vector.clone(),
                }
            })
        })
        .collect()
}

/// Score every item against the user vector and keep the best `k`.
///
/// `score = poi_weight x dot(user, poi) + city_weight x dot(user, city)`;
/// all vectors are assumed normalised, so the dot products act as cosine
/// similarities. Output is sorted by score descending with stable
/// tie-breaks on input order.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "score blending is arithmetic")]
pub fn recommend<'a>(
    user_vector: &[f32],
    items: &'a [VectorItem],
    weights: BlendWeights,
    k: usize,
) -> Vec<(&'a VectorItem, f32)> {
    let mut scored: Vec<(&VectorItem, f32)> = items
        .iter()
        .map(|item| {
            let score = weights.poi * dot(user_vector, &item.poi_vector)
                + weights.city * dot(user_vector, &item.city_vector);
            (item, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_arithmetic, reason = "assertions compare float scores")]
    #![expect(clippy::indexing_slicing, reason = "fixture sizes are fixed")]

    use dalla_core::CanonicalTag;
    use rstest::rstest;

    use super::{BlendWeights, VectorItem, recommend};
    use crate::vectorize::vectorize;

    fn item(city: &str, name: &str, tags: &[CanonicalTag], city_tags: &[CanonicalTag]) -> VectorItem {
        VectorItem {
            city: city.to_owned(),
            country: "France".to_owned(),
            name: name.to_owned(),
            tags: tags.to_vec(),
            poi_vector: vectorize(tags),
            city_vector: vectorize(city_tags),
        }
    }

    #[rstest]
    fn default_blend_weights_validate() {
        assert!(BlendWeights::default().validate().is_ok());
    }

    #[rstest]
    #[case(f32::NAN, 0.3)]
    #[case(0.7, -0.1)]
    #[case(f32::INFINITY, 0.3)]
    fn bad_blend_weights_are_rejected(#[case] poi: f32, #[case] city: f32) {
        assert!(BlendWeights { poi, city }.validate().is_err());
    }

    #[rstest]
    fn matching_pois_outrank_unrelated_ones() {
        let items = vec![
            item("Nice", "Plage", &[CanonicalTag::Beach], &[CanonicalTag::Warm]),
            item("Chamonix", "Sentier", &[CanonicalTag::Hiking], &[CanonicalTag::Cold]),
        ];
        let user = vectorize(&[CanonicalTag::Beach, CanonicalTag::Warm]);
        let ranked = recommend(&user, &items, BlendWeights::default(), 10);
        assert_eq!(ranked[0].0.city, "Nice");
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[rstest]
    fn city_context_breaks_poi_ties() {
        // Identical POIs; only the city vector differs.
        let items = vec![
            item("Chamonix", "Resto", &[CanonicalTag::Restaurant], &[CanonicalTag::Cold]),
            item("Nice", "Resto", &[CanonicalTag::Restaurant], &[CanonicalTag::Beach]),
        ];
        let user = vectorize(&[CanonicalTag::Restaurant, CanonicalTag::Beach]);
        let ranked = recommend(&user, &items, BlendWeights::default(), 10);
        assert_eq!(ranked[0].0.city, "Nice");
    }

    #[rstest]
    fn k_truncates_the_result() {
        let items = vec![
            item("Nice", "A", &[CanonicalTag::Beach], &[]),
            item("Nice", "B", &[CanonicalTag::Beach], &[]),
            item("Nice", "C", &[CanonicalTag::Beach], &[]),
        ];
        let user = vectorize(&[CanonicalTag::Beach]);
        assert_eq!(recommend(&user, &items, BlendWeights::default(), 2).len(), 2);
    }

    #[rstest]
    fn exact_ties_keep_input_order() {
        let items = vec![
            item("Nice", "A", &[CanonicalTag::Beach], &[]),
            item("Cannes", "B", &[CanonicalTag::Beach], &[]),
        ];
        let user = vectorize(&[CanonicalTag::Beach]);
        let ranked = recommend(&user, &items, BlendWeights::default(), 10);
        assert_eq!(ranked[0].0.city, "Nice");
        assert_eq!(ranked[1].0.city, "Cannes");
    }

    #[rstest]
    fn empty_items_yield_empty_recommendations() {
        let user = vectorize(&[CanonicalTag::Beach]);
        assert!(recommend(&user, &[], BlendWeights::default(), 5).is_empty());
    }
}
