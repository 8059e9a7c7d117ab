use crate::angles::{normalize, orb, separation};
use crate::aspects::types::{
    AspectCore, AspectDefinition, AspectObjectRef, ChartSide, SynastryAspect,
};
use crate::chart::{Chart, PlanetPosition};
use crate::config::SynastrySettings;
use crate::i18n::{interpret_aspect, Locale};

/// Orbs below this are reported as exact
const EXACT_ORB: f64 = 0.1;

/// Normalized strength of an aspect: 1.0 when exact, 0.0 at the orb limit.
pub fn aspect_strength(orb: f64, max_orb: f64) -> f64 {
    if max_orb <= 0.0 {
        return if orb <= 0.0 { 1.0 } else { 0.0 };
    }
    ((max_orb - orb) / max_orb).clamp(0.0, 1.0)
}

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    definitions: Vec<AspectDefinition>,
    motion_step: f64,
}

impl AspectCalculator {
    pub fn new(settings: &SynastrySettings) -> Self {
        Self {
            definitions: settings.definitions(),
            motion_step: settings.motion_step_days,
        }
    }

    /// Compute every aspect between a tracked planet of `chart_a` and a
    /// tracked planet of `chart_b`.
    ///
    /// Order follows the enumeration: chart A planet, chart B planet, catalog.
    /// Planets missing from either chart are skipped.
    pub fn compute_synastry_aspects(
        &self,
        chart_a: &Chart,
        chart_b: &Chart,
        locale: Locale,
    ) -> Vec<SynastryAspect> {
        chart_a
            .tracked_positions()
            .flat_map(move |p1| {
                chart_b
                    .tracked_positions()
                    .flat_map(move |p2| self.aspects_between(p1, p2, locale))
            })
            .collect()
    }

    fn aspects_between<'a>(
        &'a self,
        p1: &'a PlanetPosition,
        p2: &'a PlanetPosition,
        locale: Locale,
    ) -> impl Iterator<Item = SynastryAspect> + 'a {
        let from = AspectObjectRef {
            side: ChartSide::First,
            planet: p1.planet,
        };
        let to = AspectObjectRef {
            side: ChartSide::Second,
            planet: p2.planet,
        };
        self.calculate_aspects(p1.longitude, p2.longitude, p1.speed, p2.speed)
            .map(move |aspect| SynastryAspect {
                from,
                to,
                interpretation: interpret_aspect(from, to, &aspect, locale),
                aspect,
            })
    }

    /// Every catalog aspect formed by two longitudes.
    ///
    /// More than one definition can match when orbs overlap; all are returned.
    pub fn calculate_aspects(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
    ) -> impl Iterator<Item = AspectCore> + '_ {
        self.definitions
            .iter()
            .filter_map(move |definition| {
                self.calculate_aspect(definition, lon1, lon2, speed1, speed2)
            })
    }

    /// Test a single definition against two longitudes.
    pub fn calculate_aspect(
        &self,
        definition: &AspectDefinition,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
    ) -> Option<AspectCore> {
        let orb_value = orb(lon1, lon2, definition.angle);
        if orb_value > definition.max_orb {
            return None;
        }

        Some(AspectCore {
            definition: *definition,
            orb: orb_value,
            strength: aspect_strength(orb_value, definition.max_orb),
            is_applying: self.is_aspect_applying(lon1, lon2, speed1, speed2, definition.angle, orb_value),
            is_exact: orb_value < EXACT_ORB,
            is_retrograde: speed1 < 0.0 || speed2 < 0.0,
        })
    }

    /// Determine if an aspect is applying (approaching exact) or separating
    ///
    /// Both planets are projected forward one motion step at their current
    /// speed; the aspect applies when the projected orb is strictly smaller.
    fn is_aspect_applying(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
        aspect_angle: f64,
        current_orb: f64,
    ) -> bool {
        let future1 = normalize(lon1 + speed1 * self.motion_step);
        let future2 = normalize(lon2 + speed2 * self.motion_step);
        let future_orb = (separation(future1, future2) - aspect_angle).abs();

        future_orb < current_orb
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new(&SynastrySettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectKind;

    #[test]
    fn test_strength_endpoints() {
        assert_eq!(aspect_strength(0.0, 10.0), 1.0);
        assert_eq!(aspect_strength(10.0, 10.0), 0.0);
        assert_eq!(aspect_strength(5.0, 10.0), 0.5);
    }

    #[test]
    fn test_applying_when_faster_planet_closes_gap() {
        let calculator = AspectCalculator::default();
        // Moon 10 degrees behind the Sun, moving 13 deg/day against 1 deg/day
        let conjunction = AspectKind::Conjunction.definition();
        let aspect = calculator.calculate_aspect(&conjunction, 90.0, 100.0, 13.0, 1.0).unwrap();
        assert!(aspect.is_applying);

        let aspect = calculator.calculate_aspect(&conjunction, 105.0, 100.0, 13.0, 1.0).unwrap();
        assert!(!aspect.is_applying);
    }

    #[test]
    fn test_retrograde_flag() {
        let calculator = AspectCalculator::default();
        let trine = AspectKind::Trine.definition();
        let aspect = calculator.calculate_aspect(&trine, 0.0, 121.0, -0.5, 1.0).unwrap();
        assert!(aspect.is_retrograde);
        assert_eq!(aspect.orb, 1.0);
    }
}
