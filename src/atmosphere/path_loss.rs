use super::constants::{ATMOSPHERE_CEILING, EARTH_RADIUS};
use super::density::air_density;

/// Height increment (m) of the path integration at a given height.
/// Coarser steps where the air is thin.
fn height_increment(height: f64) -> f64 {
    if height > 16_000.0 {
        100.0
    } else if height > 10_000.0 {
        50.0
    } else if height > 6_000.0 {
        20.0
    } else {
        10.0
    }
}

/// Slope da/dh of the slant path length `a` with respect to height, for a
/// spherical earth and a ray at angle phi to the local vertical.
fn path_slope(cos_phi: f64, height: f64) -> f64 {
    let r = EARTH_RADIUS;
    (r + height) / (r * r * cos_phi * cos_phi + 2.0 * height * r + height * height).sqrt()
}

/// Slant path length from the ground up to `height`.
fn path_length(cos_phi: f64, height: f64) -> f64 {
    let r = EARTH_RADIUS;
    (2.0 * r + height) * height
        / (r * cos_phi + (r * r * cos_phi * cos_phi + 2.0 * height * r + height * height).sqrt())
}

/// Integral of air density along a ray from the ground to the top of the
/// atmosphere:
///
/// ```text
/// integral from 0 to ceiling of rho(h) (da/dh) dh
/// ```
///
/// `cos_phi` is the cosine of the ray's angle to the vertical (1.0 is straight
/// up). The result is in arbitrary units; it only appears scaled by the loss
/// constant. Undefined for `cos_phi <= 0`, callers must only pass rays that
/// reach the ground.
pub fn path_loss(cos_phi: f64) -> f64 {
    let mut increment = 10.0;
    let mut height = increment;

    // da/dh is singular at h = 0 for a grazing ray, so the first step uses the
    // mean density of the step over the path length to its top.
    let mut loss = 0.5
        * increment
        * (air_density(height) + air_density(0.0))
        * path_length(cos_phi, height);

    // Lower half-weight of the trapezoidal sum.
    loss += 0.5 * increment * air_density(height) * path_slope(cos_phi, height);

    while height < ATMOSPHERE_CEILING {
        increment = height_increment(height);
        height += increment;
        loss += increment * air_density(height) * path_slope(cos_phi, height);
    }

    loss
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_path_is_shortest() {
        let vertical = path_loss(1.0);
        for cos_phi in [0.999, 0.9, 0.7, 0.5, 0.2, 0.05, 0.001] {
            let slant = path_loss(cos_phi);
            assert!(
                slant > vertical,
                "cos_phi = {cos_phi}: {slant} should exceed {vertical}"
            );
        }
    }

    #[test]
    fn test_path_loss_increases_towards_horizon() {
        let mut previous = path_loss(1.0);
        for step in 1..100 {
            let cos_phi = 1.0 - step as f64 * 0.01;
            let loss = path_loss(cos_phi);
            assert!(loss > 0.0);
            assert!(loss > previous, "not increasing at cos_phi = {cos_phi}");
            previous = loss;
        }
    }

    #[test]
    fn test_slant_path_near_secant_law() {
        // Away from the horizon the curvature of the earth hardly matters.
        let ratio = path_loss(0.5) / path_loss(1.0);
        assert!((ratio - 2.0).abs() < 0.01, "{ratio}");
    }

    #[test]
    fn test_grazing_ray_is_finite() {
        let loss = path_loss(1e-9);
        assert!(loss.is_finite());
        assert!(loss > 20.0 * path_loss(1.0));
    }

    #[test]
    fn test_height_increment_schedule() {
        assert_eq!(height_increment(10.0), 10.0);
        assert_eq!(height_increment(6_000.0), 10.0);
        assert_eq!(height_increment(6_010.0), 20.0);
        assert_eq!(height_increment(12_000.0), 50.0);
        assert_eq!(height_increment(20_000.0), 100.0);
    }
}
