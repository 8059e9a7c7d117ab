//! Synastry: comparison of two birth charts.
//!
//! Given two computed charts, the engine finds the aspects between their
//! planets, overlays each chart's planets onto the other's houses and scores
//! the pair in five compatibility categories plus an overall percentage.

pub mod analysis;
pub mod angles;
pub mod aspects;
pub mod chart;
pub mod config;
pub mod error;
pub mod houses;
pub mod i18n;
pub mod scoring;
pub mod worker;

pub use analysis::{AscendantContact, SynastryAnalysisResult, SynastryEngine};
pub use aspects::{AspectCalculator, AspectKind, AspectNature, ChartSide, SynastryAspect};
pub use chart::{Chart, Planet, PlanetPosition};
pub use config::SynastrySettings;
pub use error::SynastryError;
pub use houses::HouseOverlay;
pub use i18n::Locale;
pub use scoring::{CategoryKind, CompatibilityCategory};

/// Analyze two charts with default settings.
pub fn analyze(chart_a: &Chart, chart_b: &Chart, locale: Locale) -> SynastryAnalysisResult {
    SynastryEngine::default().analyze(chart_a, chart_b, locale)
}
