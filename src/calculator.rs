//! Per-atom accessible surface area orchestration.

use log::debug;
use nalgebra::Point3;
use rayon::prelude::*;

use crate::containment::Checker;
use crate::geometry::overlap_between_spheres;
use crate::golden_spiral::GoldenSpiral;
use crate::types::{AtomSource, ConfigError, QueryError};
use crate::voxel_grid::VoxelGrid;

/// Calculator configuration.
///
/// The defaults come from the reference implementation: a water-sized probe,
/// 960 sample points, and 7.0 Å grid cells matching the largest typical
/// expanded-sphere overlap diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsaParams {
    /// Probe radius added to every atom radius.
    pub probe: f64,
    /// Number of golden-spiral sample points per sphere.
    pub sample_count: usize,
    /// Edge length of a spatial-hash grid cell.
    pub cell_size: f64,
    /// Neighborhood reach of grid lookups, in cells per axis.
    pub margin: u32,
}

impl Default for AsaParams {
    fn default() -> Self {
        Self {
            probe: 1.4,
            sample_count: 960,
            cell_size: 7.0,
            margin: 1,
        }
    }
}

/// Shrake-Rupley accessible surface area calculator.
///
/// Built once per coordinate/radius snapshot: construction populates the
/// sampler and the spatial index, and every query afterwards is a pure read.
/// Queries on distinct atoms may therefore run concurrently; the parallel
/// batch entry point is [`accessible_surface_areas`].
///
/// [`accessible_surface_areas`]: AsaCalculator::accessible_surface_areas
pub struct AsaCalculator<S: AtomSource> {
    atoms: S,
    probe: f64,
    sampling: GoldenSpiral,
    grid: VoxelGrid,
}

impl<S: AtomSource> AsaCalculator<S> {
    /// Build the calculator: generate the sample point set and index every
    /// atom with a positive radius into the spatial grid.
    ///
    /// Atoms with radius `<= 0` are left out of the index, so they never
    /// occlude anyone. Negative-radius atoms additionally fail when queried
    /// as the subject.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero sample count or a degenerate
    /// grid cell size.
    pub fn new(atoms: S, params: &AsaParams) -> Result<Self, ConfigError> {
        let sampling = GoldenSpiral::new(params.sample_count)?;

        // Anchor the grid at the first coordinate; discretization only needs
        // a consistent origin, not a bounding box.
        let origin = if atoms.is_empty() {
            Point3::origin()
        } else {
            atoms.coordinate(0)
        };
        let mut grid = VoxelGrid::new(origin, params.cell_size, params.margin)?;

        let mut indexed = 0usize;
        for index in 0..atoms.len() {
            if atoms.radius(index) > 0.0 {
                grid.insert(index, &atoms.coordinate(index));
                indexed += 1;
            }
        }

        debug!(
            "indexed {indexed} of {} atoms into {} grid cells, {} sample points",
            atoms.len(),
            grid.occupied_cells(),
            sampling.len()
        );

        Ok(Self {
            atoms,
            probe: params.probe,
            sampling,
            grid,
        })
    }

    /// Build with [`AsaParams::default`].
    ///
    /// # Errors
    ///
    /// See [`AsaCalculator::new`].
    pub fn with_defaults(atoms: S) -> Result<Self, ConfigError> {
        Self::new(atoms, &AsaParams::default())
    }

    /// Number of atoms in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Configured probe radius.
    #[must_use]
    pub const fn probe(&self) -> f64 {
        self.probe
    }

    /// Number of sample points per sphere.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sampling.len()
    }

    /// Number of sample points on atom `index`'s expanded sphere not covered
    /// by any overlapping neighbor's expanded sphere.
    ///
    /// # Errors
    ///
    /// [`QueryError::Ignored`] for a negative-radius atom,
    /// [`QueryError::OutOfRange`] for an index beyond the snapshot.
    pub fn accessible_points(&self, index: usize) -> Result<usize, QueryError> {
        let (center, radius) = self.query_sphere(index)?;
        Ok(self.count_accessible_points(&center, radius, index))
    }

    /// Accessible surface area of atom `index`,
    /// `unit_area · radius² · accessible_points`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AsaCalculator::accessible_points`].
    #[allow(clippy::cast_precision_loss)]
    pub fn accessible_surface_area(&self, index: usize) -> Result<f64, QueryError> {
        let (center, radius) = self.query_sphere(index)?;
        let count = self.count_accessible_points(&center, radius, index);
        Ok(self.sampling.unit_area() * radius * radius * count as f64)
    }

    /// Validate `index` and derive its expanded query sphere.
    fn query_sphere(&self, index: usize) -> Result<(Point3<f64>, f64), QueryError> {
        if index >= self.atoms.len() {
            return Err(QueryError::OutOfRange {
                index,
                len: self.atoms.len(),
            });
        }
        if self.atoms.radius(index) < 0.0 {
            return Err(QueryError::Ignored { index });
        }
        Ok((
            self.atoms.coordinate(index),
            self.atoms.radius(index) + self.probe,
        ))
    }

    fn count_accessible_points(&self, center: &Point3<f64>, radius: f64, index: usize) -> usize {
        let mut checker = Checker::new();

        // Coarse grid lookup, then an exact squared-distance prune: only
        // neighbors whose expanded spheres truly overlap the query sphere
        // become covering spheres.
        for candidate in self.grid.neighbors_near(center) {
            if candidate == index {
                continue;
            }
            let raw_radius = self.atoms.radius(candidate);
            if raw_radius < 0.0 {
                continue;
            }
            let neighbor_center = self.atoms.coordinate(candidate);
            let neighbor_radius = raw_radius + self.probe;
            if overlap_between_spheres(center, radius, &neighbor_center, neighbor_radius) {
                checker.add(neighbor_center, neighbor_radius);
            }
        }

        self.sampling
            .points_on_sphere(*center, radius)
            .filter(|p| checker.accepts(p))
            .count()
    }
}

impl<S: AtomSource + Sync> AsaCalculator<S> {
    /// Accessible surface area for every atom, computed across the rayon
    /// worker pool.
    ///
    /// Per-atom queries are independent reads over shared immutable state,
    /// so the batch is embarrassingly parallel. Ignored atoms yield `None`
    /// instead of failing the batch.
    #[must_use]
    pub fn accessible_surface_areas(&self) -> Vec<Option<f64>> {
        (0..self.atoms.len())
            .into_par_iter()
            .map(|index| self.accessible_surface_area(index).ok())
            .collect()
    }

    /// Accessible sample point count for every atom, in parallel.
    #[must_use]
    pub fn all_accessible_points(&self) -> Vec<Option<usize>> {
        (0..self.atoms.len())
            .into_par_iter()
            .map(|index| self.accessible_points(index).ok())
            .collect()
    }
}
