//! Small text helpers for assembling query sentences.

/// Remove duplicates while preserving first-occurrence order.
pub(crate) fn dedupe_keep_order(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Turn a raw tag token into reader-facing English.
///
/// Underscores become spaces and a handful of tokens take their plural
/// form so the sentence matches the vocabulary used in city descriptions.
pub(crate) fn humanize_token(token: &str) -> String {
    let spaced = token.replace('_', " ");
    match spaced.to_lowercase().as_str() {
        "place of worship" => "places of worship".to_owned(),
        "arts centre" => "arts centres".to_owned(),
        "shopping mall" => "shopping malls".to_owned(),
        "coffee shop" => "coffee shops".to_owned(),
        _ => spaced,
    }
}

/// Join items into natural English: "a", "a and b", "a, b, and c".
pub(crate) fn join_natural(items: &[String]) -> String {
    let kept: Vec<&String> = items.iter().filter(|item| !item.is_empty()).collect();
    match kept.as_slice() {
        [] => String::new(),
        [only] => (*only).clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => {
            let listed = head
                .iter()
                .map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{listed}, and {last}")
        }
    }
}

/// Collect the final path segment of every tag under `prefix`.
///
/// The prefix itself contributes nothing; `tourism.sights.castle` under
/// prefix `tourism.sights` yields `castle`, and deeper paths yield only
/// their last segment. Duplicates keep first-occurrence order.
pub(crate) fn leaf_values(categories: &[String], prefix: &str) -> Vec<String> {
    let dotted = format!("{prefix}.");
    let leaves = categories
        .iter()
        .filter_map(|category| category.strip_prefix(&dotted))
        .filter(|remainder| !remainder.is_empty())
        .map(|remainder| {
            remainder
                .rsplit('.')
                .next()
                .unwrap_or(remainder)
                .to_owned()
        })
        .collect();
    dedupe_keep_order(leaves)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{dedupe_keep_order, humanize_token, join_natural, leaf_values};

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[rstest]
    #[case::empty(&[], "")]
    #[case::single(&["beach"], "beach")]
    #[case::pair(&["beach", "island"], "beach and island")]
    #[case::triple(&["beach", "island", "lake"], "beach, island, and lake")]
    #[case::skips_blanks(&["beach", "", "lake"], "beach and lake")]
    fn join_natural_cases(#[case] items: &[&str], #[case] want: &str) {
        assert_eq!(join_natural(&owned(items)), want);
    }

    #[rstest]
    #[case("archaeological_site", "archaeological site")]
    #[case("shopping_mall", "shopping malls")]
    #[case("coffee_shop", "coffee shops")]
    #[case("place_of_worship", "places of worship")]
    #[case("castle", "castle")]
    fn humanize_cases(#[case] token: &str, #[case] want: &str) {
        assert_eq!(humanize_token(token), want);
    }

    #[rstest]
    fn leaf_values_take_last_segment_under_prefix() {
        let categories = owned(&[
            "tourism.sights",
            "tourism.sights.castle",
            "tourism.sights.memorial.tomb",
            "tourism.attraction",
            "tourism.sights.castle",
        ]);
        assert_eq!(
            leaf_values(&categories, "tourism.sights"),
            owned(&["castle", "tomb"])
        );
    }

    #[rstest]
    fn dedupe_preserves_first_occurrence() {
        assert_eq!(
            dedupe_keep_order(owned(&["a", "b", "a", "c", "b"])),
            owned(&["a", "b", "c"])
        );
    }
}
