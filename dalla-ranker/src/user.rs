//! Builds the user preference vector from liked and disliked text.

use dalla_core::vector::subtract;
use dalla_core::{Embedding, EmbeddingGateway};

use crate::error::RankError;

/// Embed the user's preferences, pushing the vector away from dislikes.
///
/// The likes text is embedded directly; when a non-blank dislikes text is
/// supplied it is embedded too and subtracted component-wise, so cities
/// resembling the dislikes lose similarity before any explicit tag penalty
/// is applied.
///
/// # Errors
/// Returns [`RankError::UserEmbedding`] when the gateway fails on either
/// text.
pub fn user_vector(
    gateway: &dyn EmbeddingGateway,
    likes_text: &str,
    dislikes_text: Option<&str>,
) -> Result<Embedding, RankError> {
    let likes = gateway
        .embed(likes_text)
        .map_err(|source| RankError::UserEmbedding { source })?;
    let Some(trimmed) = dislikes_text.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(likes);
    };
    let dislikes = gateway
        .embed(trimmed)
        .map_err(|source| RankError::UserEmbedding { source })?;
    Ok(subtract(&likes, &dislikes))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "tests fail fast on fixture errors")]

    use dalla_core::test_support::{FailingGateway, StaticGateway};
    use rstest::rstest;

    use super::user_vector;

    #[rstest]
    fn likes_only_returns_the_likes_embedding() {
        let gateway = StaticGateway::new([("beach restaurant", vec![1.0, 0.5])]);
        let vector = user_vector(&gateway, "beach restaurant", None).unwrap();
        assert_eq!(vector, vec![1.0, 0.5]);
    }

    #[rstest]
    fn dislikes_are_subtracted_component_wise() {
        let gateway = StaticGateway::new([
            ("beach", vec![1.0, 0.5]),
            ("mountain cold", vec![0.25, 0.5]),
        ]);
        let vector = user_vector(&gateway, "beach", Some("mountain cold")).unwrap();
        assert_eq!(vector, vec![0.75, 0.0]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_dislikes_behave_like_none(#[case] dislikes: Option<&str>) {
        let gateway = StaticGateway::new([("beach", vec![1.0, 0.5])]);
        let vector = user_vector(&gateway, "beach", dislikes).unwrap();
        assert_eq!(vector, vec![1.0, 0.5]);
    }

    #[rstest]
    fn gateway_failures_propagate() {
        let gateway = FailingGateway;
        assert!(user_vector(&gateway, "beach", None).is_err());
    }
}
