use crate::chart::Planet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    SemiSextile,
}

/// Qualitative nature of an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectNature {
    Major,
    Harmonious,
    Challenging,
    Minor,
}

/// One row of the aspect catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact separation angle in degrees
    pub angle: f64,
    /// Maximum allowed deviation from `angle`
    pub max_orb: f64,
    pub nature: AspectNature,
    pub symbol: &'static str,
}

/// Aspect catalog, in enumeration order.
pub const ASPECT_CATALOG: [AspectDefinition; 7] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        angle: 0.0,
        max_orb: 10.0,
        nature: AspectNature::Major,
        symbol: "☌",
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        angle: 180.0,
        max_orb: 10.0,
        nature: AspectNature::Challenging,
        symbol: "☍",
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        angle: 120.0,
        max_orb: 8.0,
        nature: AspectNature::Harmonious,
        symbol: "△",
    },
    AspectDefinition {
        kind: AspectKind::Square,
        angle: 90.0,
        max_orb: 8.0,
        nature: AspectNature::Challenging,
        symbol: "□",
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        angle: 60.0,
        max_orb: 6.0,
        nature: AspectNature::Harmonious,
        symbol: "⚹",
    },
    AspectDefinition {
        kind: AspectKind::Quincunx,
        angle: 150.0,
        max_orb: 3.0,
        nature: AspectNature::Minor,
        symbol: "⚻",
    },
    AspectDefinition {
        kind: AspectKind::SemiSextile,
        angle: 30.0,
        max_orb: 3.0,
        nature: AspectNature::Minor,
        symbol: "⚺",
    },
];

impl AspectKind {
    /// Catalog entry for this kind.
    pub fn definition(&self) -> AspectDefinition {
        // Catalog is indexed in declaration order
        ASPECT_CATALOG[*self as usize]
    }

    pub fn id(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
            AspectKind::Quincunx => "quincunx",
            AspectKind::SemiSextile => "semi_sextile",
        }
    }
}

/// Which of the two compared charts an object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSide {
    First,
    Second,
}

impl ChartSide {
    /// 1 for the first chart, 2 for the second.
    pub fn number(&self) -> u8 {
        match self {
            ChartSide::First => 1,
            ChartSide::Second => 2,
        }
    }

    pub fn other(&self) -> ChartSide {
        match self {
            ChartSide::First => ChartSide::Second,
            ChartSide::Second => ChartSide::First,
        }
    }
}

/// Reference to a planet in one of the two charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectObjectRef {
    pub side: ChartSide,
    pub planet: Planet,
}

/// Core aspect information
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectCore {
    /// Matched catalog entry, with the orb limit actually applied
    pub definition: AspectDefinition,
    /// Deviation from the exact angle, 0 <= orb <= definition.max_orb
    pub orb: f64,
    /// 1.0 when exact, 0.0 at the orb limit
    pub strength: f64,
    /// Whether the aspect is applying (approaching exact)
    pub is_applying: bool,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub is_exact: bool,
    /// Whether either planet is retrograde
    pub is_retrograde: bool,
}

/// An aspect between a planet of the first chart and one of the second
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynastryAspect {
    pub from: AspectObjectRef,
    pub to: AspectObjectRef,
    pub aspect: AspectCore,
    pub interpretation: String,
}

impl SynastryAspect {
    pub fn kind(&self) -> AspectKind {
        self.aspect.definition.kind
    }

    pub fn nature(&self) -> AspectNature {
        self.aspect.definition.nature
    }

    pub fn strength(&self) -> f64 {
        self.aspect.strength
    }

    /// Whether the pair is `a` and `b` in either order.
    pub fn connects(&self, a: Planet, b: Planet) -> bool {
        (self.from.planet == a && self.to.planet == b) || (self.from.planet == b && self.to.planet == a)
    }

    pub fn involves(&self, planet: Planet) -> bool {
        self.from.planet == planet || self.to.planet == planet
    }

    /// Counted on the harmonious side of the compatibility balance.
    ///
    /// Conjunctions qualify when at least one body is benefic and neither is
    /// malefic; a benefic/malefic conjunction is left out of both sides.
    pub fn is_harmonious(&self) -> bool {
        match self.nature() {
            AspectNature::Harmonious => true,
            AspectNature::Major if self.kind() == AspectKind::Conjunction => {
                let (a, b) = (self.from.planet, self.to.planet);
                (a.is_benefic() || b.is_benefic()) && !a.is_malefic() && !b.is_malefic()
            }
            _ => false,
        }
    }

    /// Counted on the challenging side of the compatibility balance.
    ///
    /// Conjunctions qualify only when both bodies are malefic.
    pub fn is_challenging(&self) -> bool {
        match self.nature() {
            AspectNature::Challenging => true,
            AspectNature::Major if self.kind() == AspectKind::Conjunction => {
                self.from.planet.is_malefic() && self.to.planet.is_malefic()
            }
            _ => false,
        }
    }
}
