//! Reduce raw hierarchical source tags into the canonical vocabulary.
//!
//! Two strategies coexist because they trade precision against maintenance
//! cost differently:
//! - [`ExactTagNormalizer`] maps exact raw spellings through a static table;
//!   it never surprises but misses every unseen sub-tag.
//! - [`PatternTagNormalizer`] matches ordered regex rules after an
//!   unconditional drop-list, catching whole tag families (for example any
//!   `catering.restaurant.*` cuisine) at the cost of rule-order sensitivity.
//!
//! Both are pure functions of their static tables: canonical spellings pass
//! through unchanged, anything unmappable is dropped and counted, and empty
//! input yields empty output. Dropped tags are never an error; the count is
//! surfaced for data-quality auditing and logged at debug level.

use std::collections::HashMap;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use crate::CanonicalTag;

/// Outcome of a normalization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Canonical tags in first-occurrence order, de-duplicated.
    pub tags: Vec<CanonicalTag>,
    /// Number of input tags no rule could map.
    pub dropped: usize,
}

/// Map raw source tags into the canonical vocabulary.
pub trait TagNormalizer: Send + Sync {
    /// Normalize `raw`, reporting how many tags were dropped.
    fn normalize_with_report(&self, raw: &[String]) -> NormalizeReport;

    /// Normalize `raw`, discarding the drop count.
    fn normalize(&self, raw: &[String]) -> Vec<CanonicalTag> {
        self.normalize_with_report(raw).tags
    }
}

fn collect_mapped<F>(raw: &[String], map_one: F) -> NormalizeReport
where
    F: Fn(&str) -> Mapped,
{
    let mut tags = Vec::new();
    let mut dropped = 0_usize;
    for tag in raw {
        match map_one(tag) {
            Mapped::Keep(canonical) => {
                if !tags.contains(&canonical) {
                    tags.push(canonical);
                }
            }
            Mapped::Miss => dropped += 1,
            Mapped::Dropped => {}
        }
    }
    if dropped > 0 {
        log::debug!("normalization dropped {dropped} unmapped tags out of {}", raw.len());
    }
    NormalizeReport { tags, dropped }
}

enum Mapped {
    Keep(CanonicalTag),
    /// Removed by an explicit drop rule: expected noise, not a miss.
    Dropped,
    /// No rule matched.
    Miss,
}

/// Exact-spelling dictionary normalizer.
///
/// # Examples
/// ```
/// use dalla_core::{CanonicalTag, ExactTagNormalizer, TagNormalizer};
///
/// let normalizer = ExactTagNormalizer::new();
/// let tags = normalizer.normalize(&["entertainment.museum".to_owned()]);
/// assert_eq!(tags, vec![CanonicalTag::Museum]);
/// ```
#[derive(Debug, Clone)]
pub struct ExactTagNormalizer {
    table: HashMap<&'static str, CanonicalTag>,
}

const EXACT_TABLE: [(&str, CanonicalTag); 30] = [
    ("entertainment.museum", CanonicalTag::Museum),
    ("tourism.museum", CanonicalTag::Museum),
    ("heritage", CanonicalTag::Historical),
    ("building.historic", CanonicalTag::Historical),
    ("religion.place_of_worship", CanonicalTag::Church),
    ("tourism.attraction", CanonicalTag::Attraction),
    ("tourism.sights", CanonicalTag::Viewpoint),
    ("leisure.park", CanonicalTag::Park),
    ("natural.lake", CanonicalTag::Lake),
    ("natural.river", CanonicalTag::River),
    ("mountain", CanonicalTag::Mountain),
    ("beach", CanonicalTag::Beach),
    ("tropical", CanonicalTag::Tropical),
    ("sport.hiking", CanonicalTag::Hiking),
    ("sport.ski", CanonicalTag::Ski),
    ("sport.surf", CanonicalTag::Surfing),
    ("catering.restaurant", CanonicalTag::Restaurant),
    ("catering.fast_food", CanonicalTag::Restaurant),
    ("catering.cafe", CanonicalTag::Cafe),
    ("vegetarian", CanonicalTag::Vegan),
    ("local_food", CanonicalTag::LocalFood),
    ("commercial.shopping_mall", CanonicalTag::Mall),
    ("shop", CanonicalTag::Shopping),
    ("marketplace", CanonicalTag::Market),
    ("internet_access.free", CanonicalTag::Wifi),
    ("wheelchair.yes", CanonicalTag::Accessible),
    ("family_friendly", CanonicalTag::FamilyFriendly),
    ("cold", CanonicalTag::Cold),
    ("warm", CanonicalTag::Warm),
    ("accommodation.hotel", CanonicalTag::Lodging),
];

impl ExactTagNormalizer {
    /// Build the normalizer from the static table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: EXACT_TABLE.into_iter().collect(),
        }
    }

    fn map_one(&self, tag: &str) -> Mapped {
        if let Ok(canonical) = CanonicalTag::from_str(tag) {
            return Mapped::Keep(canonical);
        }
        self.table
            .get(tag)
            .copied()
            .map_or(Mapped::Miss, Mapped::Keep)
    }
}

impl Default for ExactTagNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TagNormalizer for ExactTagNormalizer {
    fn normalize_with_report(&self, raw: &[String]) -> NormalizeReport {
        collect_mapped(raw, |tag| self.map_one(tag))
    }
}

/// A regex pattern in a rule table failed to compile.
#[derive(Debug, Error)]
#[error("invalid tag pattern '{pattern}'")]
pub struct PatternError {
    /// The offending pattern text.
    pub pattern: String,
    /// Source error from the regex engine.
    #[source]
    pub source: regex::Error,
}

/// Ordered rules with prefix semantics for the drop-list and anchored or
/// substring semantics for the mapping rules; first mapping match wins.
const PATTERN_RULES: [(&str, CanonicalTag); 31] = [
    ("museum", CanonicalTag::Museum),
    ("historic", CanonicalTag::Historical),
    ("heritage", CanonicalTag::Historical),
    ("church", CanonicalTag::Church),
    (r"^religion\.place_of_worship", CanonicalTag::Church),
    (r"^tourism\.sights", CanonicalTag::Viewpoint),
    (r"^tourism\.attraction", CanonicalTag::Attraction),
    (r"^leisure\.park", CanonicalTag::Park),
    (r"^natural\.lake", CanonicalTag::Lake),
    (r"^natural\.river", CanonicalTag::River),
    ("mountain", CanonicalTag::Mountain),
    ("beach", CanonicalTag::Beach),
    ("tropical", CanonicalTag::Tropical),
    (r"^sport\.hiking", CanonicalTag::Hiking),
    (r"^sport\.ski", CanonicalTag::Ski),
    (r"^sport\.surf", CanonicalTag::Surfing),
    (r"^catering\.restaurant", CanonicalTag::Restaurant),
    (r"^catering\.fast_food", CanonicalTag::Restaurant),
    (r"^catering\.bar", CanonicalTag::Restaurant),
    (r"^catering\.cafe", CanonicalTag::Cafe),
    ("vegan", CanonicalTag::Vegan),
    ("vegetarian", CanonicalTag::Vegan),
    ("local_food", CanonicalTag::LocalFood),
    ("shopping_mall", CanonicalTag::Mall),
    ("market", CanonicalTag::Market),
    ("shop", CanonicalTag::Shopping),
    (r"^wheelchair", CanonicalTag::Accessible),
    (r"^internet_access", CanonicalTag::Wifi),
    (r"^accommodation", CanonicalTag::Lodging),
    ("cold", CanonicalTag::Cold),
    ("warm", CanonicalTag::Warm),
];

/// Families removed before mapping is attempted. Neither strategy maps
/// anything under these prefixes, so removing them early keeps the miss
/// count meaningful.
const DROP_RULES: [&str; 5] = [
    "^fee",
    "^no_fee",
    "^industrial",
    "^public_transport",
    "^highway",
];

/// Regex rule-table normalizer.
///
/// # Examples
/// ```
/// use dalla_core::{CanonicalTag, PatternTagNormalizer, TagNormalizer};
///
/// let normalizer = PatternTagNormalizer::new().unwrap();
/// let tags = normalizer.normalize(&["catering.restaurant.french".to_owned()]);
/// assert_eq!(tags, vec![CanonicalTag::Restaurant]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternTagNormalizer {
    drops: Vec<Regex>,
    rules: Vec<(Regex, CanonicalTag)>,
}

impl PatternTagNormalizer {
    /// Compile the static rule tables.
    ///
    /// # Errors
    /// Returns [`PatternError`] if a rule pattern fails to compile; the
    /// tables are static, so this only fires on a programming mistake.
    pub fn new() -> Result<Self, PatternError> {
        let drops = DROP_RULES
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        let rules = PATTERN_RULES
            .iter()
            .map(|(pattern, canonical)| compile(pattern).map(|regex| (regex, *canonical)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { drops, rules })
    }

    fn map_one(&self, tag: &str) -> Mapped {
        if self.drops.iter().any(|regex| regex.is_match(tag)) {
            return Mapped::Dropped;
        }
        for (regex, canonical) in &self.rules {
            if regex.is_match(tag) {
                return Mapped::Keep(*canonical);
            }
        }
        if let Ok(canonical) = CanonicalTag::from_str(tag) {
            return Mapped::Keep(canonical);
        }
        Mapped::Miss
    }
}

impl TagNormalizer for PatternTagNormalizer {
    fn normalize_with_report(&self, raw: &[String]) -> NormalizeReport {
        collect_mapped(raw, |tag| self.map_one(tag))
    }
}

fn compile(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError {
        pattern: pattern.to_owned(),
        source,
    })
}
