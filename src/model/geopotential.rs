use crate::constants::{EARTH_RADIUS, SURFACE_GRAVITY};

pub fn geopotential_height(geometric_height: f64) -> f64 {
    (EARTH_RADIUS / (EARTH_RADIUS + geometric_height)) * geometric_height
}

/// Inverse of [`geopotential_height`]. Defined for `geopotential_height < EARTH_RADIUS`;
/// at or above the radius the result is infinite or negative.
pub fn geometric_height(geopotential_height: f64) -> f64 {
    EARTH_RADIUS * geopotential_height / (EARTH_RADIUS - geopotential_height)
}

pub fn gravitational_accel(geometric_height: f64) -> f64 {
    let absolute_height = EARTH_RADIUS + geometric_height;
    SURFACE_GRAVITY * (EARTH_RADIUS / absolute_height).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::Rng;

    #[test]
    fn test_sea_level_is_fixed_point() {
        assert_eq!(geopotential_height(0.0), 0.0);
        assert_eq!(geometric_height(0.0), 0.0);
        assert_eq!(gravitational_accel(0.0), SURFACE_GRAVITY);
    }

    #[test]
    fn test_geopotential_below_geometric() {
        let h = geopotential_height(11_000.0);
        assert!(h < 11_000.0);
        assert_abs_diff_eq!(h, 10_981.04, epsilon = 0.01);
    }

    #[test]
    fn test_geometric_inverts_geopotential() {
        for height in [0.0, 1_000.0, 11_000.0, 47_000.0, 105_000.0] {
            assert_relative_eq!(
                geopotential_height(geometric_height(height)),
                height,
                max_relative = 1e-12
            );
        }
        assert_abs_diff_eq!(geometric_height(105_000.0), 106_759.5, epsilon = 0.1);
    }

    #[test]
    fn test_geometric_height_domain() {
        assert_abs_diff_eq!(geometric_height(0.5 * EARTH_RADIUS), EARTH_RADIUS, epsilon = 1e-6);
        assert!(geometric_height(0.999 * EARTH_RADIUS).is_finite());
        assert!(geometric_height(EARTH_RADIUS).is_infinite());
        assert!(geometric_height(2.0 * EARTH_RADIUS) < 0.0);
    }

    #[test]
    fn test_geopotential_is_monotonic() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let low: f64 = rng.gen_range(0.0..200_000.0);
            let high = low + rng.gen_range(1e-3..10_000.0);
            assert!(
                geopotential_height(high) > geopotential_height(low),
                "geopotential height must increase: {} -> {}",
                low,
                high
            );
        }
    }

    #[test]
    fn test_gravity_follows_inverse_square() {
        let g_100km = gravitational_accel(100_000.0);
        assert!(g_100km < SURFACE_GRAVITY);

        let expected_ratio = (EARTH_RADIUS / (EARTH_RADIUS + 100_000.0)).powi(2);
        assert_relative_eq!(g_100km / SURFACE_GRAVITY, expected_ratio, epsilon = 1e-12);
    }
}
