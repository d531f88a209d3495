//! Brute-force position checks.
//!
//! These scan every point and are the reference the grid-accelerated sampler must
//! agree with. [`verify_distribution`] checks a finished point set as a whole.
use glam::Vec2;
use mint::Vector2;

use crate::error::{Error, Result};

/// Relative slack allowed when verifying squared distances computed in `f32`.
const TOLERANCE: f32 = 1e-5;

/// Returns `true` if `point` lies in the disc of `max_radius` and is at least
/// `spread` away from every point in `points`.
pub fn is_valid_position(
    point: Vector2<f32>,
    spread: f32,
    max_radius: f32,
    points: &[Vector2<f32>],
) -> bool {
    let point = Vec2::from(point);
    let spread_squared = spread * spread;

    if point.length_squared() > max_radius * max_radius {
        return false;
    }

    points
        .iter()
        .all(|&other| point.distance_squared(Vec2::from(other)) >= spread_squared)
}

/// Check that every point lies within `max_radius` of the origin and that no two
/// points are closer than `spread`.
///
/// Returns [`Error::Violation`] naming the first offending point or pair.
pub fn verify_distribution(points: &[Vector2<f32>], spread: f32, max_radius: f32) -> Result<()> {
    let radius_limit = max_radius * (1.0 + TOLERANCE);
    let spread_limit = spread * (1.0 - TOLERANCE);
    let spread_squared = spread_limit * spread_limit;
    let points: Vec<Vec2> = points.iter().copied().map(Vec2::from).collect();

    for (i, p) in points.iter().enumerate() {
        if p.length_squared() > radius_limit * radius_limit {
            return Err(Error::Violation(format!(
                "point {i} at {p} lies {} from the center, beyond radius {max_radius}",
                p.length()
            )));
        }
    }

    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if a.distance_squared(*b) < spread_squared {
                return Err(Error::Violation(format!(
                    "points {i} and {j} are {} apart, closer than spread {spread}",
                    a.distance(*b)
                )));
            }
        }
    }

    Ok(())
}
