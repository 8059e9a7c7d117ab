//! Circular angle helpers shared by every synastry calculation.

/// Normalize degrees to [0, 360).
pub fn normalize(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Minimal circular distance between two longitudes, in [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    let diff = (normalize(a) - normalize(b)).abs();
    diff.min(360.0 - diff)
}

/// Deviation of the separation between two longitudes from `target_angle`.
///
/// Folded so an orb measured the long way around collapses to its minimal
/// equivalent; the result never exceeds 180.
pub fn orb(pos1: f64, pos2: f64, target_angle: f64) -> f64 {
    let raw = (separation(pos1, pos2) - target_angle).abs();
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_negative_and_large() {
        assert_eq!(normalize(-30.0), 330.0);
        assert_eq!(normalize(720.0), 0.0);
        assert_eq!(normalize(365.5), 5.5);
        assert!(normalize(-1e-18) < 360.0);
    }

    #[test]
    fn test_separation_wraps() {
        assert_eq!(separation(359.0, 1.0), 2.0);
        assert_eq!(separation(1.0, 359.0), 2.0);
        assert_eq!(separation(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_orb_conjunction_across_zero() {
        assert_eq!(orb(359.0, 1.0, 0.0), 2.0);
        assert_eq!(orb(10.0, 190.0, 180.0), 0.0);
    }
}
