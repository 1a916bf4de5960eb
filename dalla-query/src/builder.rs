//! Assembles a query sentence from preference tags.
//!
//! The sentence deliberately reuses the vocabulary of the city description
//! generator ("A destination featuring ...") so lexical overlap, and hence
//! embedding similarity, is maximised. Tags outside the five known themes
//! contribute nothing; a tag set with no thematic signal falls back to a
//! neutral sentence rather than an empty string.

use dalla_core::WeightedPreferences;

use crate::phrase::{dedupe_keep_order, humanize_token, join_natural, leaf_values};
use crate::theme::Theme;

const FALLBACK_SENTENCE: &str =
    "A destination offering a mix of travel experiences and local atmosphere.";

const MAX_CHUNKS: usize = 3;
const MAX_DETAILS: usize = 3;

const PREFERRED_SIGHTS: [&str; 12] = [
    "castle",
    "ruines",
    "monastery",
    "cathedral",
    "church",
    "chapel",
    "mosque",
    "synagogue",
    "temple",
    "archaeological site",
    "fort",
    "city gate",
];

const CUISINE_BLACKLIST: [&str; 2] = ["restaurant", "regional"];

/// Build a query sentence from unweighted preference tags.
///
/// # Examples
/// ```
/// use dalla_query::build_query_text;
///
/// let tags = vec!["heritage".to_owned(), "tourism.sights.castle".to_owned()];
/// assert_eq!(
///     build_query_text(&tags),
///     "A destination featuring historical heritage and landmarks like castle."
/// );
/// ```
#[must_use]
pub fn build_query_text(tags: &[String]) -> String {
    compose(&Signals::new(tags, None))
}

/// Build a query sentence with per-tag intensities in `1..=5`.
///
/// Each tag's weight comes from `weights`, defaulting to the neutral weight
/// for tags it does not mention. A theme's intensity is the maximum weight
/// among its member tags, and stronger themes are phrased more emphatically
/// and listed first. Empty `weights` degrade to [`build_query_text`].
#[must_use]
pub fn build_query_text_weighted(tags: &[String], weights: &WeightedPreferences) -> String {
    if weights.is_empty() {
        return build_query_text(tags);
    }
    compose(&Signals::new(tags, Some(weights)))
}

struct Signals<'a> {
    categories: Vec<String>,
    weights: Option<&'a WeightedPreferences>,
}

impl<'a> Signals<'a> {
    fn new(tags: &[String], weights: Option<&'a WeightedPreferences>) -> Self {
        let categories = dedupe_keep_order(
            tags.iter()
                .map(|tag| tag.trim().to_owned())
                .filter(|tag| !tag.is_empty())
                .collect(),
        );
        Self { categories, weights }
    }

    fn weight_of(&self, tag: &str) -> u8 {
        self.weights
            .map_or(1, |weights| weights.weight_or_default(tag))
    }

    /// Maximum weight among tags equal to `prefix` or nested under it;
    /// zero when no tag matches.
    fn prefix_weight(&self, prefix: &str) -> u8 {
        let dotted = format!("{prefix}.");
        self.categories
            .iter()
            .filter(|tag| *tag == prefix || tag.starts_with(&dotted))
            .map(|tag| self.weight_of(tag))
            .max()
            .unwrap_or(0)
    }

    fn exact_weight(&self, tag: &str) -> u8 {
        if self.categories.iter().any(|candidate| candidate == tag) {
            self.weight_of(tag)
        } else {
            0
        }
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.prefix_weight(prefix) > 0
    }

    fn leaves(&self, prefix: &str) -> Vec<String> {
        leaf_values(&self.categories, prefix)
    }
}

struct Chunk {
    theme: Theme,
    intensity: u8,
    text: String,
}

fn compose(signals: &Signals<'_>) -> String {
    let chunks: Vec<Chunk> = [
        nature_chunk(signals),
        history_chunk(signals),
        gastronomy_chunk(signals),
        shopping_chunk(signals),
        fun_chunk(signals),
    ]
    .into_iter()
    .flatten()
    .collect();

    if chunks.is_empty() {
        return FALLBACK_SENTENCE.to_owned();
    }

    let mut ordered = chunks;
    ordered.sort_by(|a, b| {
        b.intensity
            .cmp(&a.intensity)
            .then(a.theme.cmp(&b.theme))
    });
    let texts: Vec<String> = dedupe_keep_order(
        ordered.into_iter().map(|chunk| chunk.text).collect(),
    )
    .into_iter()
    .take(MAX_CHUNKS)
    .collect();

    format!("A destination featuring {}.", join_natural(&texts))
}

fn nature_chunk(signals: &Signals<'_>) -> Option<Chunk> {
    let intensity = [
        signals.prefix_weight("natural"),
        signals.prefix_weight("beach"),
        signals.prefix_weight("island"),
        signals.prefix_weight("national_park"),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    if intensity == 0 {
        return None;
    }

    let mut collected = signals.leaves("natural");
    for family in ["beach", "island", "national_park"] {
        if signals.has_prefix(family) {
            collected.push(family.to_owned());
            collected.extend(signals.leaves(family));
        }
    }
    let items: Vec<String> = dedupe_keep_order(
        collected.iter().map(|item| humanize_token(item)).collect(),
    )
    .into_iter()
    .take(MAX_DETAILS)
    .collect();

    let base = if items.is_empty() {
        "beautiful landscapes for nature lovers".to_owned()
    } else {
        format!("beautiful landscapes like {}", join_natural(&items))
    };
    Some(Chunk {
        theme: Theme::Nature,
        intensity,
        text: Theme::Nature.escalate(&base, intensity),
    })
}

fn history_chunk(signals: &Signals<'_>) -> Option<Chunk> {
    let intensity = [
        signals.prefix_weight("heritage"),
        signals.prefix_weight("tourism.sights"),
        signals.prefix_weight("religion"),
        signals.prefix_weight("memorial"),
        signals.exact_weight("building.historic"),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    if intensity == 0 {
        return None;
    }

    let sights = notable_sights(signals);
    let mut bits: Vec<String> = Vec::new();
    if signals.has_prefix("heritage") {
        bits.push("historical heritage".to_owned());
    }
    if sights.is_empty() {
        if signals.has_prefix("tourism.sights") {
            bits.push("iconic landmarks".to_owned());
        }
    } else {
        bits.push(format!("landmarks like {}", join_natural(&sights)));
    }
    if signals.has_prefix("religion") {
        bits.push("religious sites".to_owned());
    }
    if signals.has_prefix("memorial") {
        bits.push("memorials".to_owned());
    }
    if signals.exact_weight("building.historic") > 0
        && !bits.iter().any(|bit| bit == "historical heritage")
    {
        bits.push("historic architecture".to_owned());
    }

    let deduped = dedupe_keep_order(bits);
    let base = if deduped.is_empty() {
        "historical heritage".to_owned()
    } else {
        join_natural(&deduped)
    };
    Some(Chunk {
        theme: Theme::History,
        intensity,
        text: Theme::History.escalate(&base, intensity),
    })
}

/// Named landmark leaves, with recognisable monument types listed before
/// generic ones, truncated for sentence stability.
fn notable_sights(signals: &Signals<'_>) -> Vec<String> {
    let leaves = dedupe_keep_order(
        signals
            .leaves("tourism.sights")
            .iter()
            .map(|leaf| humanize_token(leaf))
            .collect(),
    );
    let (preferred, other): (Vec<String>, Vec<String>) = leaves
        .into_iter()
        .partition(|sight| PREFERRED_SIGHTS.contains(&sight.to_lowercase().as_str()));
    preferred
        .into_iter()
        .chain(other)
        .take(MAX_DETAILS)
        .collect()
}

fn gastronomy_chunk(signals: &Signals<'_>) -> Option<Chunk> {
    let intensity = [
        signals.prefix_weight("catering.restaurant"),
        signals.prefix_weight("production.winery"),
        signals.prefix_weight("production.brewery"),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    if intensity == 0 {
        return None;
    }

    let cuisines: Vec<String> = dedupe_keep_order(
        signals
            .leaves("catering.restaurant")
            .iter()
            .filter(|leaf| !CUISINE_BLACKLIST.contains(&leaf.as_str()))
            .map(|leaf| humanize_token(leaf))
            .collect(),
    )
    .into_iter()
    .take(MAX_DETAILS)
    .collect();

    let mut bits: Vec<String> = Vec::new();
    if signals.has_prefix("catering.restaurant") {
        if cuisines.is_empty() {
            bits.push("great local restaurants".to_owned());
        } else {
            bits.push(format!(
                "restaurants serving {} cuisine",
                join_natural(&cuisines)
            ));
        }
    }
    let winery = signals.has_prefix("production.winery");
    let brewery = signals.has_prefix("production.brewery");
    if winery && brewery {
        bits.push("wineries and breweries".to_owned());
    } else if winery {
        bits.push("wineries".to_owned());
    } else if brewery {
        bits.push("breweries".to_owned());
    }

    let deduped = dedupe_keep_order(bits);
    let base = if deduped.is_empty() {
        "great local restaurants".to_owned()
    } else {
        join_natural(&deduped)
    };
    Some(Chunk {
        theme: Theme::Gastronomy,
        intensity,
        text: Theme::Gastronomy.escalate(&base, intensity),
    })
}

fn shopping_chunk(signals: &Signals<'_>) -> Option<Chunk> {
    let mall = signals.exact_weight("commercial.shopping_mall");
    let marketplace = signals.exact_weight("commercial.marketplace");
    let souvenirs = signals.exact_weight("commercial.gift_and_souvenir");
    let intensity = mall.max(marketplace).max(souvenirs);
    if intensity == 0 {
        return None;
    }

    let mut bits: Vec<String> = Vec::new();
    if mall > 0 {
        bits.push("shopping malls".to_owned());
    }
    if marketplace > 0 {
        bits.push("local marketplaces".to_owned());
    }
    if souvenirs > 0 {
        bits.push("souvenir shops".to_owned());
    }
    let base = if bits.is_empty() {
        "local marketplaces".to_owned()
    } else {
        join_natural(&dedupe_keep_order(bits))
    };
    Some(Chunk {
        theme: Theme::Shopping,
        intensity,
        text: Theme::Shopping.escalate(&base, intensity),
    })
}

fn fun_chunk(signals: &Signals<'_>) -> Option<Chunk> {
    let ski = signals.has_prefix("ski");
    let nightclub = signals.has_prefix("adult.nightclub");
    let casino = signals.has_prefix("adult.casino");
    let theme_park = signals.has_prefix("entertainment.theme_park");
    let stadium = signals.has_prefix("sport.stadium");
    let intensity = [
        signals.prefix_weight("ski"),
        signals.prefix_weight("adult.nightclub"),
        signals.prefix_weight("adult.casino"),
        signals.prefix_weight("entertainment.theme_park"),
        signals.prefix_weight("sport.stadium"),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    if intensity == 0 {
        return None;
    }

    let mut bits: Vec<String> = Vec::new();
    if theme_park {
        bits.push("theme parks".to_owned());
    }
    if ski {
        bits.push("skiing".to_owned());
    }
    if stadium {
        bits.push("stadium events".to_owned());
    }
    if nightclub && casino {
        bits.push("nightlife and casinos".to_owned());
    } else if nightclub {
        bits.push("nightlife".to_owned());
    } else if casino {
        bits.push("casinos".to_owned());
    }

    let deduped = dedupe_keep_order(bits);
    let base = if deduped.is_empty() {
        "nightlife".to_owned()
    } else {
        join_natural(&deduped)
    };
    Some(Chunk {
        theme: Theme::Fun,
        intensity,
        text: Theme::Fun.escalate(&base, intensity),
    })
}
