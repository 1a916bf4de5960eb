//! Dense-vector arithmetic shared by the embedding ranker and the manual
//! tag engine.
//!
//! All operations treat degenerate input as neutral rather than fatal:
//! mismatched dimensions or a zero-norm operand yield `0.0` similarity, and
//! normalizing the zero vector returns it unchanged. Callers that need to
//! distinguish "orthogonal" from "unusable" should validate dimensions
//! before scoring.

#![expect(
    clippy::float_arithmetic,
    reason = "vector maths is the purpose of this module"
)]

/// Dot product of two equal-length vectors.
///
/// Returns `0.0` when the lengths differ.
#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a vector.
#[must_use]
pub fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity in `[-1.0, 1.0]`.
///
/// Returns `0.0` when either operand has zero norm or the dimensions
/// differ, so an absent or degenerate embedding ranks below any genuine
/// match instead of poisoning the ordering with NaN.
///
/// # Examples
/// ```
/// use dalla_core::vector::cosine_similarity;
///
/// let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
/// assert!((similarity - 0.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let denominator = norm(a) * norm(b);
    if denominator == 0.0 {
        return 0.0;
    }
    (dot(a, b) / denominator).clamp(-1.0, 1.0)
}

/// Scale a vector to unit norm.
///
/// The zero vector passes through unchanged; there is no direction to
/// preserve.
#[must_use]
pub fn l2_normalize(v: &[f32]) -> Vec<f32> {
    let magnitude = norm(v);
    if magnitude == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / magnitude).collect()
}

/// Element-wise `a - b`.
///
/// Returns `a` unchanged when the lengths differ; a malformed subtrahend
/// must not corrupt the minuend.
#[must_use]
pub fn subtract(a: &[f32], b: &[f32]) -> Vec<f32> {
    if a.len() != b.len() {
        return a.to_vec();
    }
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::indexing_slicing,
        reason = "fixed-size fixtures make out-of-bounds impossible"
    )]

    use rstest::rstest;

    use super::{cosine_similarity, dot, l2_normalize, norm, subtract};

    const TOLERANCE: f32 = 1e-6;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[rstest]
    #[case::orthogonal(&[1.0, 0.0], &[0.0, 1.0], 0.0)]
    #[case::identical(&[0.5, 0.5], &[0.5, 0.5], 1.0)]
    #[case::opposite(&[1.0, 0.0], &[-1.0, 0.0], -1.0)]
    #[case::zero_left(&[0.0, 0.0], &[1.0, 1.0], 0.0)]
    #[case::zero_right(&[1.0, 1.0], &[0.0, 0.0], 0.0)]
    fn cosine_cases(#[case] a: &[f32], #[case] b: &[f32], #[case] want: f32) {
        assert!(close(cosine_similarity(a, b), want));
    }

    #[rstest]
    fn cosine_is_symmetric() {
        let a = [0.3, 0.7, 0.1];
        let b = [0.9, 0.2, 0.4];
        assert!(close(cosine_similarity(&a, &b), cosine_similarity(&b, &a)));
    }

    #[rstest]
    fn cosine_is_scale_invariant() {
        let a = [0.3, 0.7, 0.1];
        let scaled: Vec<f32> = a.iter().map(|x| x * 5.0).collect();
        let b = [0.9, 0.2, 0.4];
        assert!(close(cosine_similarity(&a, &b), cosine_similarity(&scaled, &b)));
    }

    #[rstest]
    fn mismatched_dimensions_yield_zero() {
        assert!(close(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0));
        assert!(close(dot(&[1.0, 0.0], &[1.0]), 0.0));
    }

    #[rstest]
    fn normalized_vector_has_unit_norm() {
        let unit = l2_normalize(&[3.0, 4.0]);
        assert!(close(norm(&unit), 1.0));
        assert!(close(unit[0], 0.6));
        assert!(close(unit[1], 0.8));
    }

    #[rstest]
    fn zero_vector_normalizes_to_itself() {
        assert_eq!(l2_normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[rstest]
    fn subtract_is_element_wise() {
        assert_eq!(subtract(&[1.0, 2.0], &[0.5, 3.0]), vec![0.5, -1.0]);
    }

    #[rstest]
    fn subtract_with_mismatched_lengths_keeps_minuend() {
        assert_eq!(subtract(&[1.0, 2.0], &[0.5]), vec![1.0, 2.0]);
    }
}
