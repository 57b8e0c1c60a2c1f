//! Golden-spiral sampling of the unit sphere surface.

use std::f64::consts::PI;

use nalgebra::Point3;

use crate::types::ConfigError;

/// Fixed set of quasi-uniformly distributed points on the unit sphere.
///
/// Points are laid out along a golden-angle spiral: latitudes step down in
/// equal increments of height while longitudes advance by the golden angle
/// `π(3 − √5)`, which avoids the pole clustering of latitude/longitude grids.
/// The construction is fully deterministic, so the same count always yields
/// the same point sequence.
pub struct GoldenSpiral {
    points: Vec<Point3<f64>>,
    unit_area: f64,
}

impl GoldenSpiral {
    /// Generate `count` sample points.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSampleCount`] if `count` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::InvalidSampleCount(count));
        }

        let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
        let count_f = count as f64;

        let points = (0..count)
            .map(|index| {
                let index_f = index as f64;
                // Heights descend from just below +1 to just above -1 in
                // equal steps, one latitude band per point.
                let h = 2.0f64.mul_add(-(index_f + 0.5) / count_f, 1.0);
                let band_radius = h.mul_add(-h, 1.0).max(0.0).sqrt();
                let azimuth = golden_angle * index_f;
                Point3::new(
                    band_radius * azimuth.cos(),
                    band_radius * azimuth.sin(),
                    h,
                )
            })
            .collect();

        Ok(Self {
            points,
            unit_area: 4.0 * PI / count_f,
        })
    }

    /// Unit vectors of the sample points, in construction order.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Surface area represented by a single point on the unit sphere, `4π/N`.
    #[must_use]
    pub const fn unit_area(&self) -> f64 {
        self.unit_area
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the sample points scaled and translated onto an
    /// arbitrary sphere.
    pub fn points_on_sphere(
        &self,
        center: Point3<f64>,
        radius: f64,
    ) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.points.iter().map(move |v| {
            Point3::new(
                v.x.mul_add(radius, center.x),
                v.y.mul_add(radius, center.y),
                v.z.mul_add(radius, center.z),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_count_is_rejected() {
        assert!(matches!(
            GoldenSpiral::new(0),
            Err(ConfigError::InvalidSampleCount(0))
        ));
    }

    #[test]
    fn unit_area_sums_to_full_sphere() {
        for count in [1, 12, 960] {
            let sampling = GoldenSpiral::new(count).unwrap();
            assert_eq!(sampling.len(), count);
            #[allow(clippy::cast_precision_loss)]
            let total = sampling.unit_area() * count as f64;
            assert_relative_eq!(total, 4.0 * PI, epsilon = 1e-12);
        }
    }

    #[test]
    fn points_lie_on_unit_sphere() {
        let sampling = GoldenSpiral::new(960).unwrap();
        for p in sampling.points() {
            let norm_sq = p.z.mul_add(p.z, p.x.mul_add(p.x, p.y * p.y));
            assert_relative_eq!(norm_sq, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let a = GoldenSpiral::new(240).unwrap();
        let b = GoldenSpiral::new(240).unwrap();
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn points_are_roughly_uniform() {
        // Every octant of the sphere should receive close to an eighth of
        // the points.
        let count = 960;
        let sampling = GoldenSpiral::new(count).unwrap();
        let mut octants = [0usize; 8];
        for p in sampling.points() {
            let mut o = 0;
            if p.x > 0.0 {
                o |= 1;
            }
            if p.y > 0.0 {
                o |= 2;
            }
            if p.z > 0.0 {
                o |= 4;
            }
            octants[o] += 1;
        }
        for &n in &octants {
            assert!(
                n > count / 16 && n < count / 4,
                "octant occupancy {n} out of balance"
            );
        }
    }

    #[test]
    fn projection_onto_sphere() {
        let sampling = GoldenSpiral::new(96).unwrap();
        let center = Point3::new(1.0, -2.0, 3.0);
        let radius = 2.9;

        for p in sampling.points_on_sphere(center, radius) {
            let dist = (p - center).norm();
            assert_relative_eq!(dist, radius, epsilon = 1e-12);
        }
    }
}
