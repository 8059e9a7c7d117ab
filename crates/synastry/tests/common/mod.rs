#![allow(dead_code)]

use synastry::{Chart, Planet, PlanetPosition};

/// Twelve equal houses starting at `first`.
pub fn equal_cusps(first: f64) -> Vec<f64> {
    (0..12).map(|i| (first + i as f64 * 30.0) % 360.0).collect()
}

pub fn chart(positions: &[(Planet, f64, f64)], ascendant: f64) -> Chart {
    Chart::new(
        positions
            .iter()
            .map(|(planet, lon, speed)| PlanetPosition::new(*planet, *lon, *speed))
            .collect(),
        ascendant,
        equal_cusps(ascendant),
    )
}

pub fn person_a() -> Chart {
    chart(
        &[
            (Planet::Sun, 15.0, 1.0),
            (Planet::Moon, 130.0, 13.2),
            (Planet::Mercury, 25.0, 1.4),
            (Planet::Venus, 340.0, 1.2),
            (Planet::Mars, 200.0, 0.6),
            (Planet::Jupiter, 75.0, 0.2),
            (Planet::Saturn, 290.0, -0.05),
            (Planet::NorthNode, 110.0, -0.05),
            (Planet::SouthNode, 290.0, -0.05),
            (Planet::Pluto, 230.0, 0.02),
        ],
        5.0,
    )
}

pub fn person_b() -> Chart {
    chart(
        &[
            (Planet::Sun, 135.5, 1.0),
            (Planet::Moon, 18.0, 12.5),
            (Planet::Mercury, 150.0, -0.3),
            (Planet::Venus, 205.0, 1.1),
            (Planet::Mars, 338.0, 0.7),
            (Planet::Jupiter, 255.0, 0.1),
            (Planet::Saturn, 12.0, 0.03),
            (Planet::NorthNode, 48.0, -0.05),
            (Planet::SouthNode, 228.0, -0.05),
        ],
        100.0,
    )
}

/// Every tracked planet at the same longitude.
pub fn stacked(longitude: f64, ascendant: f64) -> Chart {
    let positions: Vec<(Planet, f64, f64)> = synastry::chart::TRACKED_PLANETS
        .iter()
        .map(|p| (*p, longitude, 1.0))
        .collect();
    chart(&positions, ascendant)
}
