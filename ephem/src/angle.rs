//! Angle normalization and spherical separation helpers.

/// Normalize an angle to `[0, 360)` degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to `(-180, +180]` degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Great-circle separation in degrees between two points given as
/// (longitude, latitude) pairs on a sphere.
pub fn separation_deg(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let b1 = lat1.to_radians();
    let b2 = lat2.to_radians();
    let dl = (lon1 - lon2).to_radians();
    let cos_sep = b1.sin() * b2.sin() + b1.cos() * b2.cos() * dl.cos();
    cos_sep.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deg_wraps_into_range() {
        assert!((normalize_deg(480.0) - 120.0).abs() < 1e-12);
        assert!((normalize_deg(-90.0) - 270.0).abs() < 1e-12);
        assert_eq!(normalize_deg(0.0), 0.0);
    }

    #[test]
    fn test_normalize_pm180_is_signed() {
        assert!((normalize_pm180(350.0) + 10.0).abs() < 1e-12);
        assert!((normalize_pm180(-350.0) - 10.0).abs() < 1e-12);
        assert!((normalize_pm180(180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_separation_identities() {
        assert!(separation_deg(40.0, 10.0, 40.0, 10.0).abs() < 1e-9);
        // Opposite points on the equator.
        assert!((separation_deg(0.0, 0.0, 180.0, 0.0) - 180.0).abs() < 1e-9);
        // Pole to equator is a quarter circle.
        assert!((separation_deg(25.0, 90.0, 140.0, 0.0) - 90.0).abs() < 1e-9);
    }
}
