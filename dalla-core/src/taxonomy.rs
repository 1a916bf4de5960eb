//! The canonical tag vocabulary.
//!
//! Every raw source tag is reduced into this fixed, 31-term set. The variant
//! order is load-bearing: it fixes the dimension order of the manual tag
//! vectors, so reordering variants invalidates any persisted vector.
//!
//! # Examples
//! ```
//! use dalla_core::CanonicalTag;
//!
//! assert_eq!(CanonicalTag::Museum.as_str(), "museum");
//! assert_eq!(CanonicalTag::COUNT, 31);
//! ```

use serde::{Deserialize, Serialize};

/// A member of the reduced vocabulary shared by both ranking pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalTag {
    /// Museums of any kind.
    Museum,
    /// Galleries and artistic venues.
    Art,
    /// Monuments and memorials.
    Monument,
    /// Historic buildings and heritage sites.
    Historical,
    /// Places of worship.
    Church,
    /// Generic tourist attractions.
    Attraction,
    /// Sights and viewpoints.
    Viewpoint,
    /// Urban parks and gardens.
    Park,
    /// Lakes.
    Lake,
    /// Rivers.
    River,
    /// Mountains and alpine terrain.
    Mountain,
    /// Beaches.
    Beach,
    /// Tropical climate or scenery.
    Tropical,
    /// Hiking trails.
    Hiking,
    /// Surf spots.
    Surfing,
    /// Ski areas.
    Ski,
    /// Cycling routes.
    Cycling,
    /// Swimming spots.
    Swimming,
    /// Restaurants, including fast food.
    Restaurant,
    /// Cafes and coffee shops.
    Cafe,
    /// Vegan and vegetarian options.
    Vegan,
    /// Local and regional food.
    LocalFood,
    /// General shopping.
    Shopping,
    /// Shopping malls.
    Mall,
    /// Open-air markets.
    Market,
    /// Internet access.
    Wifi,
    /// Wheelchair accessibility.
    Accessible,
    /// Family friendly venues.
    FamilyFriendly,
    /// Cold climate.
    Cold,
    /// Warm climate.
    Warm,
    /// Hotels and other lodging.
    Lodging,
}

impl CanonicalTag {
    /// Number of vocabulary terms, and hence the manual vector dimension.
    pub const COUNT: usize = Self::ALL.len();

    /// Every vocabulary term in dimension order.
    pub const ALL: [Self; 31] = [
        Self::Museum,
        Self::Art,
        Self::Monument,
        Self::Historical,
        Self::Church,
        Self::Attraction,
        Self::Viewpoint,
        Self::Park,
        Self::Lake,
        Self::River,
        Self::Mountain,
        Self::Beach,
        Self::Tropical,
        Self::Hiking,
        Self::Surfing,
        Self::Ski,
        Self::Cycling,
        Self::Swimming,
        Self::Restaurant,
        Self::Cafe,
        Self::Vegan,
        Self::LocalFood,
        Self::Shopping,
        Self::Mall,
        Self::Market,
        Self::Wifi,
        Self::Accessible,
        Self::FamilyFriendly,
        Self::Cold,
        Self::Warm,
        Self::Lodging,
    ];

    /// Return the tag as its lowercase canonical spelling.
    ///
    /// # Examples
    /// ```
    /// use dalla_core::CanonicalTag;
    ///
    /// assert_eq!(CanonicalTag::LocalFood.as_str(), "local_food");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Museum => "museum",
            Self::Art => "art",
            Self::Monument => "monument",
            Self::Historical => "historical",
            Self::Church => "church",
            Self::Attraction => "attraction",
            Self::Viewpoint => "viewpoint",
            Self::Park => "park",
            Self::Lake => "lake",
            Self::River => "river",
            Self::Mountain => "mountain",
            Self::Beach => "beach",
            Self::Tropical => "tropical",
            Self::Hiking => "hiking",
            Self::Surfing => "surfing",
            Self::Ski => "ski",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Vegan => "vegan",
            Self::LocalFood => "local_food",
            Self::Shopping => "shopping",
            Self::Mall => "mall",
            Self::Market => "market",
            Self::Wifi => "wifi",
            Self::Accessible => "accessible",
            Self::FamilyFriendly => "family_friendly",
            Self::Cold => "cold",
            Self::Warm => "warm",
            Self::Lodging => "lodging",
        }
    }

    /// Return the tag's dimension in the manual vector space.
    #[must_use]
    #[expect(
        clippy::as_conversions,
        reason = "fieldless enum discriminants convert losslessly to usize"
    )]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed per-tag weight used by the manual vectorizer.
    ///
    /// Activity and scenery terms that strongly identify a destination weigh
    /// most; amenity terms such as wifi weigh least. Terms without a tuned
    /// value weigh `1.0`.
    #[must_use]
    pub const fn weight(self) -> f32 {
        match self {
            Self::Hiking | Self::Ski => 1.5,
            Self::Beach | Self::Surfing => 1.4,
            Self::Mountain | Self::Tropical => 1.3,
            Self::Museum | Self::Cycling => 1.2,
            Self::Art | Self::Monument | Self::Historical | Self::Attraction | Self::Lake
            | Self::LocalFood => 1.1,
            Self::Park | Self::Swimming | Self::Restaurant | Self::Lodging => 1.0,
            Self::Church | Self::Viewpoint | Self::Vegan => 0.9,
            Self::River | Self::Cafe | Self::Market => 0.8,
            Self::Shopping => 0.6,
            Self::Mall | Self::FamilyFriendly => 0.5,
            Self::Wifi | Self::Accessible => 0.3,
            Self::Cold | Self::Warm => 0.2,
        }
    }
}

impl std::fmt::Display for CanonicalTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CanonicalTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown canonical tag '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::CanonicalTag;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(CanonicalTag::Beach.to_string(), CanonicalTag::Beach.as_str());
    }

    #[rstest]
    fn spelling_round_trips_for_every_term() {
        for tag in CanonicalTag::ALL {
            assert_eq!(CanonicalTag::from_str(tag.as_str()), Ok(tag));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = CanonicalTag::from_str("volcano").unwrap_err();
        assert!(err.contains("unknown canonical tag"));
    }

    #[rstest]
    fn indices_cover_the_dimension_range() {
        for (position, tag) in CanonicalTag::ALL.iter().enumerate() {
            assert_eq!(tag.index(), position);
        }
    }

    #[rstest]
    fn weights_are_positive_and_bounded() {
        for tag in CanonicalTag::ALL {
            assert!(tag.weight() > 0.0 && tag.weight() <= 1.5);
        }
    }
}
