//! House overlays: where one chart's planets land in the other chart's houses.

use crate::angles::normalize;
use crate::aspects::types::ChartSide;
use crate::chart::{Chart, Planet};
use crate::i18n::{life_area, Locale};
use serde::Serialize;

/// Houses 1, 5, 7 and 10, weighted in key findings
pub const ANGULAR_HOUSES: [u8; 4] = [1, 5, 7, 10];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseOverlay {
    pub planet: Planet,
    /// Chart the planet comes from; the house belongs to the other chart
    pub source: ChartSide,
    /// House number (1-12)
    pub house: u8,
    pub life_area: String,
}

impl HouseOverlay {
    pub fn is_angular(&self) -> bool {
        ANGULAR_HOUSES.contains(&self.house)
    }
}

/// House (1-12) whose cusp interval contains `longitude`.
///
/// Returns `None` when the cusps are incomplete or degenerate and no interval
/// matches.
pub fn find_house(longitude: f64, cusps: &[f64]) -> Option<u8> {
    if cusps.len() < 12 {
        return None;
    }
    let lon = normalize(longitude);
    (0..12).find_map(|i| {
        let start = normalize(cusps[i]);
        let end = normalize(cusps[(i + 1) % 12]);
        let inside = if start <= end {
            lon >= start && lon < end
        } else {
            // Interval wraps past 0/360
            lon >= start || lon < end
        };
        inside.then_some(i as u8 + 1)
    })
}

/// House for `longitude`, falling back to house 1 on malformed cusp data.
pub fn house_position(longitude: f64, cusps: &[f64]) -> u8 {
    find_house(longitude, cusps).unwrap_or_else(|| {
        log::warn!(
            "No house interval contains {:.2} ({} cusps); using house 1",
            longitude,
            cusps.len()
        );
        1
    })
}

/// Place every tracked planet of `source` into the houses of `target`.
pub fn compute_overlays(
    source: &Chart,
    target: &Chart,
    side: ChartSide,
    locale: Locale,
) -> Vec<HouseOverlay> {
    source
        .tracked_positions()
        .map(|position| {
            let house = house_position(position.longitude, &target.house_cusps);
            HouseOverlay {
                planet: position.planet,
                source: side,
                house,
                life_area: life_area(house, locale).to_string(),
            }
        })
        .collect()
}
