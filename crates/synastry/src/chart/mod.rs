pub mod planet;

pub use planet::{Planet, TRACKED_PLANETS};

use crate::error::SynastryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Position of one body in a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day, negative when retrograde)
    pub speed: f64,
}

impl PlanetPosition {
    pub fn new(planet: Planet, longitude: f64, speed: f64) -> Self {
        Self {
            planet,
            longitude,
            speed,
        }
    }
}

/// A computed birth chart, as produced by the chart-construction layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub planet_positions: Vec<PlanetPosition>,
    /// Ascendant longitude in degrees
    pub ascendant: f64,
    /// House cusps: index i is the start of house i + 1
    pub house_cusps: Vec<f64>,
}

impl Chart {
    pub fn new(planet_positions: Vec<PlanetPosition>, ascendant: f64, house_cusps: Vec<f64>) -> Self {
        Self {
            planet_positions,
            ascendant,
            house_cusps,
        }
    }

    /// First recorded position for `planet`, if the chart has one.
    pub fn position(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planet_positions.iter().find(|p| p.planet == planet)
    }

    /// Positions of the tracked bodies present in this chart, in tracked order.
    pub fn tracked_positions(&self) -> impl Iterator<Item = &PlanetPosition> + '_ {
        TRACKED_PLANETS.iter().filter_map(move |planet| self.position(*planet))
    }

    /// Check the chart at the construction boundary.
    ///
    /// `index` is only used to label the error (1 or 2).
    pub fn validate(&self, index: u8) -> Result<(), SynastryError> {
        let invalid = |reason: String| SynastryError::InvalidChart {
            chart: index,
            reason,
        };

        if !self.ascendant.is_finite() {
            return Err(invalid(format!("ascendant is not finite: {}", self.ascendant)));
        }
        if self.house_cusps.len() != 12 {
            return Err(invalid(format!(
                "expected 12 house cusps, got {}",
                self.house_cusps.len()
            )));
        }
        if let Some((i, cusp)) = self
            .house_cusps
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite())
        {
            return Err(invalid(format!("house cusp {} is not finite: {}", i + 1, cusp)));
        }

        let mut seen = HashSet::new();
        for position in &self.planet_positions {
            if !position.longitude.is_finite() || !position.speed.is_finite() {
                return Err(invalid(format!(
                    "{} has a non-finite longitude or speed",
                    position.planet.id()
                )));
            }
            if !seen.insert(position.planet) {
                return Err(invalid(format!("{} appears more than once", position.planet.id())));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps() -> Vec<f64> {
        (0..12).map(|i| i as f64 * 30.0).collect()
    }

    #[test]
    fn test_validate_accepts_well_formed_chart() {
        let chart = Chart::new(
            vec![PlanetPosition::new(Planet::Sun, 10.0, 1.0)],
            0.0,
            equal_cusps(),
        );
        assert!(chart.validate(1).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_cusps() {
        let chart = Chart::new(vec![], 0.0, vec![0.0; 11]);
        let err = chart.validate(2).unwrap_err();
        assert!(matches!(err, SynastryError::InvalidChart { chart: 2, .. }));
    }

    #[test]
    fn test_validate_rejects_nan_longitude() {
        let chart = Chart::new(
            vec![PlanetPosition::new(Planet::Moon, f64::NAN, 13.0)],
            0.0,
            equal_cusps(),
        );
        assert!(chart.validate(1).is_err());
    }

    #[test]
    fn test_tracked_positions_skip_outer_planets() {
        let chart = Chart::new(
            vec![
                PlanetPosition::new(Planet::Pluto, 200.0, 0.01),
                PlanetPosition::new(Planet::Moon, 20.0, 13.0),
                PlanetPosition::new(Planet::Sun, 10.0, 1.0),
            ],
            0.0,
            equal_cusps(),
        );
        let planets: Vec<Planet> = chart.tracked_positions().map(|p| p.planet).collect();
        assert_eq!(planets, vec![Planet::Sun, Planet::Moon]);
    }
}
