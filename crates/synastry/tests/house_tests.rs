mod common;

use synastry::houses::{compute_overlays, find_house, house_position};
use synastry::{Chart, ChartSide, Locale, Planet, PlanetPosition};

fn wrapping_cusps() -> Vec<f64> {
    // House 1 starts at 20, house 12 at 350
    vec![20.0, 50.0, 80.0, 110.0, 140.0, 170.0, 200.0, 230.0, 260.0, 290.0, 320.0, 350.0]
}

#[test]
fn test_wrapping_house_contains_zero() {
    let cusps = wrapping_cusps();
    assert_eq!(find_house(5.0, &cusps), Some(12));
    assert_eq!(find_house(355.0, &cusps), Some(12));
    assert_eq!(find_house(20.0, &cusps), Some(1));
    assert_eq!(find_house(19.99, &cusps), Some(12));
}

#[test]
fn test_unequal_cusps() {
    let cusps = vec![
        280.0, 315.0, 350.0, 20.0, 45.0, 70.0, 100.0, 135.0, 170.0, 200.0, 225.0, 250.0,
    ];
    assert_eq!(find_house(300.0, &cusps), Some(1));
    // House 3 spans the 0/360 boundary
    assert_eq!(find_house(0.0, &cusps), Some(3));
    assert_eq!(find_house(10.0, &cusps), Some(3));
    assert_eq!(find_house(60.0, &cusps), Some(5));
    assert_eq!(find_house(275.0, &cusps), Some(12));
}

#[test]
fn test_longitude_outside_range_is_normalized() {
    let cusps = common::equal_cusps(0.0);
    assert_eq!(find_house(-10.0, &cusps), Some(12));
    assert_eq!(find_house(390.0, &cusps), Some(2));
}

#[test]
fn test_malformed_cusps_fall_back_to_first_house() {
    assert_eq!(house_position(123.0, &[]), 1);
    assert_eq!(house_position(123.0, &[0.0; 12]), 1);
}

#[test]
fn test_overlay_scenario_wraparound() {
    let source = common::chart(&[(Planet::Venus, 5.0, 1.2)], 0.0);
    let target = Chart::new(vec![PlanetPosition::new(Planet::Sun, 0.0, 1.0)], 20.0, wrapping_cusps());

    let overlays = compute_overlays(&source, &target, ChartSide::First, Locale::English);

    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].planet, Planet::Venus);
    assert_eq!(overlays[0].source, ChartSide::First);
    assert_eq!(overlays[0].house, 12);
    assert_eq!(overlays[0].life_area, "subconscious & spirituality");
}

#[test]
fn test_overlays_cover_every_tracked_planet() {
    let a = common::person_a();
    let b = common::person_b();

    let overlays = compute_overlays(&a, &b, ChartSide::First, Locale::English);

    // Pluto is present in chart A but not tracked
    assert_eq!(overlays.len(), 9);
    for overlay in &overlays {
        assert!((1..=12).contains(&overlay.house));
    }
    // Chart B uses equal houses from 100: Moon at 130 is in the 2nd
    let moon = overlays.iter().find(|o| o.planet == Planet::Moon).unwrap();
    assert_eq!(moon.house, 2);
}
