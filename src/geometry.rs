//! Squared-distance predicates shared by the grid, checker, and calculator.
//!
//! Everything on the hot path compares squared Euclidean distances against
//! squared thresholds; no square roots are taken anywhere in the pipeline.

use nalgebra::Point3;

#[inline]
pub(crate) fn distance_sq(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm_squared()
}

/// Whether two expanded spheres overlap.
///
/// Strict `<`: exactly-touching spheres do not count as overlapping, so a
/// tangent neighbor never covers any sample point.
#[inline]
pub(crate) fn overlap_between_spheres(
    left_center: &Point3<f64>,
    left_radius: f64,
    right_center: &Point3<f64>,
    right_radius: f64,
) -> bool {
    let sum_radii = left_radius + right_radius;
    distance_sq(left_center, right_center) < sum_radii * sum_radii
}
