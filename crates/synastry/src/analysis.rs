//! Synastry analysis: runs every stage over two charts and assembles the result.

use crate::angles::normalize;
use crate::aspects::calculator::AspectCalculator;
use crate::aspects::types::{AspectCore, AspectKind, ChartSide, SynastryAspect};
use crate::chart::{Chart, Planet};
use crate::config::{SynastrySettings, MAX_KEY_FINDINGS};
use crate::error::SynastryError;
use crate::houses::{compute_overlays, HouseOverlay};
use crate::i18n::{describe_overlay, Locale};
use crate::scoring::{overall_compatibility, score_categories, CompatibilityCategory};
use serde::Serialize;

/// A planet of the second chart conjunct the first chart's ascendant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AscendantContact {
    pub planet: Planet,
    pub aspect: AspectCore,
}

/// Complete comparison of two charts.
///
/// Subsets (harmonious, challenging, luminary, attraction) are index views
/// into `aspects`, which is sorted by descending strength.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynastryAnalysisResult {
    pub aspects: Vec<SynastryAspect>,
    harmonious: Vec<usize>,
    challenging: Vec<usize>,
    luminary_pair: Vec<usize>,
    attraction_pair: Vec<usize>,
    /// Planets of chart 1 placed in chart 2's houses
    pub first_in_second: Vec<HouseOverlay>,
    /// Planets of chart 2 placed in chart 1's houses
    pub second_in_first: Vec<HouseOverlay>,
    pub categories: Vec<CompatibilityCategory>,
    /// Percentage in [0, 100]
    pub overall_compatibility: f64,
    pub key_findings: Vec<String>,
    pub ascendant_connections: Vec<AscendantContact>,
}

impl SynastryAnalysisResult {
    fn view<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a SynastryAspect> + 'a {
        indices.iter().map(move |i| &self.aspects[*i])
    }

    pub fn harmonious(&self) -> impl Iterator<Item = &SynastryAspect> + '_ {
        self.view(&self.harmonious)
    }

    pub fn challenging(&self) -> impl Iterator<Item = &SynastryAspect> + '_ {
        self.view(&self.challenging)
    }

    /// Sun/Moon aspects across the two charts.
    pub fn luminary_aspects(&self) -> impl Iterator<Item = &SynastryAspect> + '_ {
        self.view(&self.luminary_pair)
    }

    /// Venus/Mars aspects across the two charts.
    pub fn attraction_aspects(&self) -> impl Iterator<Item = &SynastryAspect> + '_ {
        self.view(&self.attraction_pair)
    }

    pub fn harmonious_indices(&self) -> &[usize] {
        &self.harmonious
    }

    pub fn challenging_indices(&self) -> &[usize] {
        &self.challenging
    }
}

fn indices_where(aspects: &[SynastryAspect], pred: impl Fn(&SynastryAspect) -> bool) -> Vec<usize> {
    aspects
        .iter()
        .enumerate()
        .filter(|(_, a)| pred(*a))
        .map(|(i, _)| i)
        .collect()
}

/// Synastry engine: a pure function of two charts and its settings.
#[derive(Debug, Clone)]
pub struct SynastryEngine {
    settings: SynastrySettings,
    calculator: AspectCalculator,
}

impl SynastryEngine {
    pub fn new(settings: SynastrySettings) -> Result<Self, SynastryError> {
        settings.validate()?;
        Ok(Self {
            calculator: AspectCalculator::new(&settings),
            settings,
        })
    }

    /// Validate both charts, then analyze them.
    pub fn analyze_checked(
        &self,
        chart_a: &Chart,
        chart_b: &Chart,
        locale: Locale,
    ) -> Result<SynastryAnalysisResult, SynastryError> {
        chart_a.validate(1)?;
        chart_b.validate(2)?;
        Ok(self.analyze(chart_a, chart_b, locale))
    }

    /// Compare `chart_a` (person 1) with `chart_b` (person 2).
    ///
    /// Inputs are assumed finite; see [`Chart::validate`].
    pub fn analyze(&self, chart_a: &Chart, chart_b: &Chart, locale: Locale) -> SynastryAnalysisResult {
        let mut aspects = self.calculator.compute_synastry_aspects(chart_a, chart_b, locale);
        // Stable: equal strengths keep enumeration order
        aspects.sort_by(|a, b| b.strength().total_cmp(&a.strength()));

        let harmonious = indices_where(&aspects, |a| a.is_harmonious());
        let challenging = indices_where(&aspects, |a| a.is_challenging());
        let luminary_pair = indices_where(&aspects, |a| a.connects(Planet::Sun, Planet::Moon));
        let attraction_pair = indices_where(&aspects, |a| a.connects(Planet::Venus, Planet::Mars));

        let first_in_second = compute_overlays(chart_a, chart_b, ChartSide::First, locale);
        let second_in_first = compute_overlays(chart_b, chart_a, ChartSide::Second, locale);

        let categories = score_categories(&aspects, locale);
        let overall = overall_compatibility(&aspects);
        let ascendant_connections = self.ascendant_connections(chart_a, chart_b);
        let key_findings = self.key_findings(&aspects, &first_in_second, &second_in_first, locale);

        log::debug!(
            "Synastry: {} aspects ({} harmonious, {} challenging), {:.1}% overall",
            aspects.len(),
            harmonious.len(),
            challenging.len(),
            overall
        );

        SynastryAnalysisResult {
            aspects,
            harmonious,
            challenging,
            luminary_pair,
            attraction_pair,
            first_in_second,
            second_in_first,
            categories,
            overall_compatibility: overall,
            key_findings,
            ascendant_connections,
        }
    }

    /// Planets of `chart_b` conjunct the ascendant of `chart_a`.
    ///
    /// Only this direction is computed; chart A's planets are never tested
    /// against chart B's ascendant.
    fn ascendant_connections(&self, chart_a: &Chart, chart_b: &Chart) -> Vec<AscendantContact> {
        let mut conjunction = AspectKind::Conjunction.definition();
        conjunction.max_orb = self.settings.ascendant_orb;
        let ascendant = normalize(chart_a.ascendant);

        chart_b
            .tracked_positions()
            .filter_map(|position| {
                self.calculator
                    .calculate_aspect(&conjunction, position.longitude, ascendant, position.speed, 0.0)
                    .map(|aspect| AscendantContact {
                        planet: position.planet,
                        aspect,
                    })
            })
            .collect()
    }

    fn key_findings(
        &self,
        sorted_aspects: &[SynastryAspect],
        first_in_second: &[HouseOverlay],
        second_in_first: &[HouseOverlay],
        locale: Locale,
    ) -> Vec<String> {
        let from_aspects = sorted_aspects
            .iter()
            .take(self.settings.aspect_findings)
            .map(|a| a.interpretation.clone());
        let from_houses = first_in_second
            .iter()
            .chain(second_in_first)
            .filter(|o| o.is_angular())
            .take(self.settings.house_findings)
            .map(|o| describe_overlay(o, locale));

        from_aspects.chain(from_houses).take(MAX_KEY_FINDINGS).collect()
    }
}

impl Default for SynastryEngine {
    fn default() -> Self {
        let settings = SynastrySettings::default();
        Self {
            calculator: AspectCalculator::new(&settings),
            settings,
        }
    }
}
