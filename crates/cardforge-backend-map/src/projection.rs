//! Mollweide projection.
//!
//! Equal-area projection used for all region outlines so area ratios are
//! faithful on the card. The auxiliary angle has no closed form and is
//! solved by Newton iteration.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

const MAX_ITERATIONS: usize = 32;
const TOLERANCE: f64 = 1e-10;

/// Projects (longitude, latitude) in degrees to Mollweide x/y.
///
/// Uses a unit sphere and a central meridian of 0; callers only rely on
/// relative positions, so absolute scale is irrelevant.
pub fn project(lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();

    let theta = solve_theta(lat);
    let x = (2.0 * SQRT_2 / PI) * lon * theta.cos();
    let y = SQRT_2 * theta.sin();
    (x, y)
}

/// Solves 2θ + sin 2θ = π sin φ for θ.
fn solve_theta(lat: f64) -> f64 {
    // The iteration degenerates at the poles where the derivative is 0.
    if (lat.abs() - FRAC_PI_2).abs() < 1e-12 {
        return lat.signum() * FRAC_PI_2;
    }

    let target = PI * lat.sin();
    let mut theta = lat;
    for _ in 0..MAX_ITERATIONS {
        let delta = (2.0 * theta + (2.0 * theta).sin() - target) / (2.0 + 2.0 * (2.0 * theta).cos());
        theta -= delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    theta
}

/// Projects a ring of (longitude, latitude) degree pairs.
pub fn project_ring(ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
    ring.iter().map(|&(lon, lat)| project(lon, lat)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        let (x, y) = project(0.0, 0.0);
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_equator_x_is_linear() {
        // At the equator θ = 0, so x = (2√2/π)·λ.
        let (x, y) = project(90.0, 0.0);
        assert!((x - 2.0 * SQRT_2 / PI * FRAC_PI_2).abs() < 1e-9);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_poles() {
        let (_, y_north) = project(0.0, 90.0);
        let (_, y_south) = project(0.0, -90.0);
        assert!((y_north - SQRT_2).abs() < 1e-9);
        assert!((y_south + SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_northern_latitudes_above_equator() {
        let (_, y45) = project(0.0, 45.0);
        let (_, y60) = project(0.0, 60.0);
        assert!(y45 > 0.0);
        assert!(y60 > y45);
        assert!(y60 < SQRT_2);
    }

    #[test]
    fn test_symmetry() {
        let (xw, yw) = project(-30.0, 40.0);
        let (xe, ye) = project(30.0, 40.0);
        assert!((xw + xe).abs() < 1e-12);
        assert!((yw - ye).abs() < 1e-12);

        let (_, yn) = project(10.0, 50.0);
        let (_, ys) = project(10.0, -50.0);
        assert!((yn + ys).abs() < 1e-9);
    }
}
