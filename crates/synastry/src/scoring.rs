//! Weighted compatibility scoring over classified synastry aspects.

use crate::aspects::types::{AspectKind, AspectNature, SynastryAspect};
use crate::chart::Planet;
use crate::i18n::{category_description, category_name, Locale};
use serde::{Deserialize, Serialize};

/// Upper bound of every category score
pub const MAX_CATEGORY_SCORE: f64 = 10.0;

/// Keeps the overall percentage finite when no aspects count either way
pub const BALANCE_EPSILON: f64 = 0.01;

/// Weight per unit of strength for the two pair categories
const PAIR_WEIGHT: f64 = 10.0;
/// Weight per unit of strength for the single-planet categories
const PLANET_WEIGHT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    EmotionalBond,
    Romance,
    Communication,
    Stability,
    Growth,
}

impl CategoryKind {
    /// All categories in result order.
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::EmotionalBond,
        CategoryKind::Romance,
        CategoryKind::Communication,
        CategoryKind::Stability,
        CategoryKind::Growth,
    ];

    /// Icon reference for the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            CategoryKind::EmotionalBond => "favorite",
            CategoryKind::Romance => "local_florist",
            CategoryKind::Communication => "forum",
            CategoryKind::Stability => "foundation",
            CategoryKind::Growth => "trending_up",
        }
    }

    /// Contribution of one aspect to this category, before capping.
    fn contribution(&self, aspect: &SynastryAspect) -> f64 {
        let counts = match self {
            CategoryKind::EmotionalBond => is_pair_bond(aspect, Planet::Sun, Planet::Moon),
            CategoryKind::Romance => is_pair_bond(aspect, Planet::Venus, Planet::Mars),
            CategoryKind::Communication => aspect.is_harmonious() && aspect.involves(Planet::Mercury),
            CategoryKind::Stability => aspect.is_harmonious() && aspect.involves(Planet::Saturn),
            CategoryKind::Growth => aspect.is_harmonious() && aspect.involves(Planet::Jupiter),
        };
        if !counts {
            return 0.0;
        }
        let weight = match self {
            CategoryKind::EmotionalBond | CategoryKind::Romance => PAIR_WEIGHT,
            _ => PLANET_WEIGHT,
        };
        aspect.strength() * weight
    }
}

/// Pair categories take harmonious aspects and any conjunction.
///
/// An "exact" conjunction here means the conjunction kind at any orb within
/// its limit, not only the sub-0.1° `is_exact` case.
fn is_pair_bond(aspect: &SynastryAspect, a: Planet, b: Planet) -> bool {
    aspect.connects(a, b)
        && (aspect.nature() == AspectNature::Harmonious || aspect.kind() == AspectKind::Conjunction)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityCategory {
    pub kind: CategoryKind,
    pub name: String,
    /// Score in [0, max_score]
    pub score: f64,
    pub max_score: f64,
    pub description: String,
    pub icon: String,
}

/// Score one category from the classified aspect list.
pub fn score_category(kind: CategoryKind, aspects: &[SynastryAspect], locale: Locale) -> CompatibilityCategory {
    let raw: f64 = aspects.iter().map(|a| kind.contribution(a)).sum();
    CompatibilityCategory {
        kind,
        name: category_name(kind, locale).to_string(),
        score: raw.clamp(0.0, MAX_CATEGORY_SCORE),
        max_score: MAX_CATEGORY_SCORE,
        description: category_description(kind, locale).to_string(),
        icon: kind.icon().to_string(),
    }
}

/// All five categories, in fixed order.
pub fn score_categories(aspects: &[SynastryAspect], locale: Locale) -> Vec<CompatibilityCategory> {
    CategoryKind::ALL
        .iter()
        .map(|kind| score_category(*kind, aspects, locale))
        .collect()
}

pub fn harmonious_strength(aspects: &[SynastryAspect]) -> f64 {
    aspects.iter().filter(|a| a.is_harmonious()).map(|a| a.strength()).sum()
}

pub fn challenging_strength(aspects: &[SynastryAspect]) -> f64 {
    aspects.iter().filter(|a| a.is_challenging()).map(|a| a.strength()).sum()
}

/// Overall compatibility percentage in [0, 100].
///
/// Zero when neither harmonious nor challenging aspects exist.
pub fn overall_compatibility(aspects: &[SynastryAspect]) -> f64 {
    let harmonious = harmonious_strength(aspects);
    let challenging = challenging_strength(aspects);
    (100.0 * harmonious / (harmonious + challenging + BALANCE_EPSILON)).clamp(0.0, 100.0)
}
