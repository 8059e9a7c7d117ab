use approx::assert_abs_diff_eq;
use synastry::angles::{normalize, orb, separation};

#[test]
fn test_normalize_range() {
    for angle in [-720.5, -360.0, -1.0, 0.0, 45.0, 359.999, 360.0, 725.0] {
        let n = normalize(angle);
        assert!((0.0..360.0).contains(&n), "normalize({}) = {}", angle, n);
    }
    assert_abs_diff_eq!(normalize(-720.5), 359.5, epsilon = 1e-9);
}

#[test]
fn test_separation_is_symmetric() {
    let samples = [0.0, 1.0, 44.5, 90.0, 179.9, 180.0, 270.25, 359.0, -10.0, 400.0];
    for a in samples {
        for b in samples {
            let ab = separation(a, b);
            assert_eq!(ab, separation(b, a));
            assert!((0.0..=180.0).contains(&ab));
        }
    }
}

#[test]
fn test_conjunction_orb_wraps_through_zero() {
    assert_eq!(orb(359.0, 1.0, 0.0), 2.0);
    assert_eq!(orb(1.0, 359.0, 0.0), 2.0);
}

#[test]
fn test_orb_never_exceeds_half_circle() {
    for target in [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0] {
        for step in 0..72 {
            let lon = step as f64 * 5.0;
            let value = orb(0.0, lon, target);
            assert!((0.0..=180.0).contains(&value));
        }
    }
}
