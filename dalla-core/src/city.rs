//! City and point-of-interest records.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching
//! the seed data. A city's derived artifacts (generated description text,
//! stored embedding vector, canonical city tags) start empty and are filled
//! in by the ingest and ranking crates.

use geo::Coord;

use crate::{CanonicalTag, Embedding};

/// A single place of interest inside a city.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dalla_core::Poi;
///
/// let poi = Poi::new(
///     "Musee des Beaux-Arts",
///     Coord { x: 4.83, y: 45.76 },
///     vec!["entertainment.museum".to_owned()],
/// );
/// assert_eq!(poi.categories.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Display name from the seed data.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Raw hierarchical category tags, as collected.
    pub categories: Vec<String>,
}

impl Poi {
    /// Construct a point of interest from seed fields.
    pub fn new(name: impl Into<String>, location: Coord<f64>, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            location,
            categories,
        }
    }
}

/// A candidate travel destination.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dalla_core::City;
///
/// let city = City::new(1, "Lyon", "France", Coord { x: 4.83, y: 45.76 });
/// assert!(city.embedding.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Stable identifier from the seed data.
    pub id: u64,
    /// City name.
    pub name: String,
    /// Country name.
    pub country: String,
    /// Geospatial position of the city centre.
    pub location: Coord<f64>,
    /// Places of interest collected for the city.
    pub pois: Vec<Poi>,
    /// Canonical tags aggregated from the city's POIs.
    pub city_tags: Vec<CanonicalTag>,
    /// Generated description sentence, once built.
    pub description: Option<String>,
    /// Stored embedding of the description, once computed.
    pub embedding: Option<Embedding>,
}

impl City {
    /// Construct a city with no POIs and no derived artifacts.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        country: impl Into<String>,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            location,
            pois: Vec::new(),
            city_tags: Vec::new(),
            description: None,
            embedding: None,
        }
    }

    /// Attach POIs while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_pois(mut self, pois: Vec<Poi>) -> Self {
        self.pois = pois;
        self
    }

    /// Attach canonical city tags while consuming `self`.
    #[must_use]
    pub fn with_city_tags(mut self, tags: Vec<CanonicalTag>) -> Self {
        self.city_tags = tags;
        self
    }

    /// Attach a generated description while consuming `self`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a stored embedding while consuming `self`.
    #[must_use]
    pub fn with_embedding(mut self, embedding: Embedding) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Canonical city tags as their string spellings, for penalty lookups
    /// against raw disliked-tag names.
    #[must_use]
    pub fn tag_names(&self) -> Vec<&'static str> {
        self.city_tags.iter().map(|tag| tag.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use geo::Coord;

    use super::{City, Poi};
    use crate::CanonicalTag;

    #[test]
    fn city_starts_without_derived_artifacts() {
        let city = City::new(7, "Porto", "Portugal", Coord { x: -8.61, y: 41.15 });
        assert!(city.description.is_none());
        assert!(city.embedding.is_none());
        assert!(city.city_tags.is_empty());
    }

    #[test]
    fn builders_chain() {
        let poi = Poi::new("Mercado do Bolhao", Coord { x: -8.60, y: 41.15 }, vec![]);
        let city = City::new(7, "Porto", "Portugal", Coord { x: -8.61, y: 41.15 })
            .with_pois(vec![poi])
            .with_city_tags(vec![CanonicalTag::Market]);
        assert_eq!(city.pois.len(), 1);
        assert_eq!(city.tag_names(), vec!["market"]);
    }
}
