//! Point-in-spheres containment testing.

use nalgebra::Point3;

use crate::geometry::distance_sq;

/// A covering sphere, stored with its radius pre-squared.
#[derive(Debug, Clone, Copy)]
struct CoveringSphere {
    center: Point3<f64>,
    radius_sq: f64,
}

/// Predicate over sample points: a point is accepted iff it lies outside
/// every registered covering sphere.
///
/// Acceptance uses `|p − center|² >= radius²`, so a point exactly on a
/// covering surface still counts as exposed. All tests are squared-distance
/// comparisons against squared thresholds, which is exact.
#[derive(Debug, Default)]
pub struct Checker {
    spheres: Vec<CoveringSphere>,
}

impl Checker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more covering sphere.
    pub fn add(&mut self, center: Point3<f64>, radius: f64) {
        self.spheres.push(CoveringSphere {
            center,
            radius_sq: radius * radius,
        });
    }

    /// Whether `point` lies outside all registered spheres.
    #[must_use]
    pub fn accepts(&self, point: &Point3<f64>) -> bool {
        self.spheres
            .iter()
            .all(|s| distance_sq(point, &s.center) >= s.radius_sq)
    }

    /// Number of registered covering spheres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_checker_accepts_everything() {
        let checker = Checker::new();
        assert!(checker.accepts(&Point3::new(0.0, 0.0, 0.0)));
        assert!(checker.accepts(&Point3::new(1e6, -1e6, 0.0)));
    }

    #[test]
    fn rejects_points_inside_any_sphere() {
        let mut checker = Checker::new();
        checker.add(Point3::new(0.0, 0.0, 0.0), 1.0);
        checker.add(Point3::new(5.0, 0.0, 0.0), 2.0);

        assert!(!checker.accepts(&Point3::new(0.5, 0.0, 0.0)));
        assert!(!checker.accepts(&Point3::new(4.0, 0.5, 0.0)));
        assert!(checker.accepts(&Point3::new(2.5, 0.0, 0.0)));
    }

    #[test]
    fn surface_points_are_accepted() {
        let mut checker = Checker::new();
        checker.add(Point3::new(0.0, 0.0, 0.0), 1.0);
        assert!(checker.accepts(&Point3::new(1.0, 0.0, 0.0)));
        assert!(checker.accepts(&Point3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn adding_spheres_only_shrinks_acceptance() {
        let probe_points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.5, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(-2.0, -2.0, 0.0),
        ];

        let mut checker = Checker::new();
        let mut accepted_before: Vec<bool> =
            probe_points.iter().map(|p| checker.accepts(p)).collect();

        for (center, radius) in [
            (Point3::new(0.0, 0.0, 0.0), 1.0),
            (Point3::new(0.0, 2.0, 0.0), 1.5),
        ] {
            checker.add(center, radius);
            let accepted_after: Vec<bool> =
                probe_points.iter().map(|p| checker.accepts(p)).collect();
            for (before, after) in accepted_before.iter().zip(&accepted_after) {
                assert!(*before || !*after, "acceptance grew after adding a sphere");
            }
            accepted_before = accepted_after;
        }
    }
}
