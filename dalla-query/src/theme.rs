//! The fixed thematic vocabulary query sentences draw from.

/// Themes a preference tag can speak to.
///
/// The discriminant order is the stable presentation order used when two
/// themes carry the same intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Theme {
    /// Landscapes, beaches, islands, national parks.
    Nature,
    /// Heritage, landmarks, religious sites, memorials.
    History,
    /// Restaurants, wineries, breweries.
    Gastronomy,
    /// Malls, marketplaces, souvenir shops.
    Shopping,
    /// Skiing, nightlife, casinos, theme parks, stadium events.
    Fun,
}

impl Theme {
    /// Intensify a base phrase for a weight in `1..=5`.
    ///
    /// Weight 1 is the plain phrase; higher weights append increasingly
    /// emphatic qualifiers without repeating keywords, so the sentence
    /// stays close to the vocabulary of city descriptions.
    #[must_use]
    pub fn escalate(self, base: &str, weight: u8) -> String {
        let suffixes: [&str; 4] = match self {
            Self::Nature => [
                " and outdoor activities",
                " with great natural diversity",
                " with a strong focus on nature",
                " as a top priority",
            ],
            Self::History => [
                " and cultural experiences",
                " with rich historical significance",
                " with a strong focus on culture and history",
                " as a top priority",
            ],
            Self::Gastronomy => [
                " and local specialties",
                " with diverse culinary offerings",
                " with a strong food focus",
                " as a top priority",
            ],
            Self::Shopping => [
                " and retail therapy",
                " with great shopping variety",
                " with a strong focus on shopping",
                " as a top priority",
            ],
            Self::Fun => [
                " and entertainment options",
                " with vibrant recreational activities",
                " with a strong focus on fun",
                " as a top priority",
            ],
        };
        match weight {
            0 | 1 => base.to_owned(),
            2 => format!("{base}{}", suffixes[0]),
            3 => format!("{base}{}", suffixes[1]),
            4 => format!("{base}{}", suffixes[2]),
            _ => format!("{base}{}", suffixes[3]),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Theme;

    #[rstest]
    #[case(1, "skiing")]
    #[case(2, "skiing and entertainment options")]
    #[case(3, "skiing with vibrant recreational activities")]
    #[case(4, "skiing with a strong focus on fun")]
    #[case(5, "skiing as a top priority")]
    fn escalation_steps(#[case] weight: u8, #[case] want: &str) {
        assert_eq!(Theme::Fun.escalate("skiing", weight), want);
    }

    #[rstest]
    fn themes_order_by_presentation_rank() {
        assert!(Theme::Nature < Theme::History);
        assert!(Theme::Shopping < Theme::Fun);
    }
}
