//! Manual weighted vectorization over the canonical vocabulary.

use dalla_core::CanonicalTag;
use dalla_core::vector::l2_normalize;

/// Build a weighted vector over the canonical vocabulary.
///
/// Each dimension corresponds to one [`CanonicalTag`] in declaration
/// order; a dimension is set to the tag's static weight when the tag is
/// present and `0.0` otherwise. The result is L2-normalised so a plain
/// dot product acts as cosine similarity; the all-zero vector (no known
/// tags) is returned unnormalised.
///
/// # Examples
/// ```
/// use dalla_core::CanonicalTag;
/// use dalla_vector::vectorize;
///
/// let vector = vectorize(&[CanonicalTag::Beach]);
/// assert_eq!(vector.len(), CanonicalTag::COUNT);
/// let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
/// assert!((norm - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn vectorize(tags: &[CanonicalTag]) -> Vec<f32> {
    let raw: Vec<f32> = CanonicalTag::ALL
        .iter()
        .map(|dim| if tags.contains(dim) { dim.weight() } else { 0.0 })
        .collect();
    l2_normalize(&raw)
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_arithmetic, reason = "assertions compare float norms")]
    #![expect(clippy::indexing_slicing, reason = "dimension count is fixed")]

    use dalla_core::CanonicalTag;
    use dalla_core::vector::{dot, norm};
    use rstest::rstest;

    use super::vectorize;

    const TOLERANCE: f32 = 1e-6;

    #[rstest]
    fn empty_tags_produce_the_zero_vector() {
        let vector = vectorize(&[]);
        assert_eq!(vector.len(), CanonicalTag::COUNT);
        assert!(vector.iter().all(|component| *component == 0.0));
    }

    #[rstest]
    fn single_tag_vectors_are_unit_length() {
        let vector = vectorize(&[CanonicalTag::Hiking]);
        assert!((norm(&vector) - 1.0).abs() < TOLERANCE);
        assert!(vector[CanonicalTag::Hiking.index()] > 0.0);
    }

    #[rstest]
    fn heavier_tags_dominate_the_direction() {
        // hiking carries weight 1.5, wifi 0.3.
        let vector = vectorize(&[CanonicalTag::Hiking, CanonicalTag::Wifi]);
        assert!(vector[CanonicalTag::Hiking.index()] > vector[CanonicalTag::Wifi.index()]);
    }

    #[rstest]
    fn duplicate_tags_do_not_change_the_vector() {
        let once = vectorize(&[CanonicalTag::Beach]);
        let twice = vectorize(&[CanonicalTag::Beach, CanonicalTag::Beach]);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn identical_tag_sets_have_full_similarity() {
        let a = vectorize(&[CanonicalTag::Beach, CanonicalTag::Restaurant]);
        let b = vectorize(&[CanonicalTag::Restaurant, CanonicalTag::Beach]);
        assert!((dot(&a, &b) - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn disjoint_tag_sets_are_orthogonal() {
        let a = vectorize(&[CanonicalTag::Beach]);
        let b = vectorize(&[CanonicalTag::Ski]);
        assert!(dot(&a, &b).abs() < TOLERANCE);
    }
}
