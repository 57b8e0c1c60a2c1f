//! Uniform-grid spatial hash over atom positions.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::types::ConfigError;

/// Discretized grid coordinates of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GridPoint {
    x: i32,
    y: i32,
    z: i32,
}

impl GridPoint {
    #[allow(clippy::cast_possible_truncation)]
    fn from_point(p: &Point3<f64>, origin: &Point3<f64>, cell_size: f64) -> Self {
        Self {
            x: ((p.x - origin.x) / cell_size).floor() as i32,
            y: ((p.y - origin.y) / cell_size).floor() as i32,
            z: ((p.z - origin.z) / cell_size).floor() as i32,
        }
    }
}

/// Spatial hash index mapping grid cells to atom indices.
///
/// Cells are sized by the caller so that any sphere able to overlap a query
/// sphere lands in the same or an adjacent cell; [`neighbors_near`] then only
/// has to walk the `(2·margin + 1)³` cell neighborhood instead of the whole
/// atom set. The cell granularity trades exactness for speed: results are a
/// superset of the true neighbors and callers prune geometrically.
///
/// Within each cell, indices keep insertion order, so lookups are
/// deterministic for identical build sequences.
///
/// [`neighbors_near`]: VoxelGrid::neighbors_near
pub struct VoxelGrid {
    origin: Point3<f64>,
    cell_size: f64,
    margin: i32,
    cells: HashMap<GridPoint, Vec<usize>>,
}

impl VoxelGrid {
    /// Create an empty grid anchored at `origin`.
    ///
    /// `cell_size` should be at least the largest expected expanded-sphere
    /// diameter; with `margin >= 1` that guarantees no overlapping neighbor
    /// is ever missed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCellSize`] for a non-positive or
    /// non-finite cell size.
    pub fn new(origin: Point3<f64>, cell_size: f64, margin: u32) -> Result<Self, ConfigError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            origin,
            cell_size,
            margin: i32::try_from(margin).unwrap_or(i32::MAX),
            cells: HashMap::new(),
        })
    }

    /// Add atom `index` to the cell containing `coordinate`.
    pub fn insert(&mut self, index: usize, coordinate: &Point3<f64>) {
        let gp = GridPoint::from_point(coordinate, &self.origin, self.cell_size);
        self.cells.entry(gp).or_default().push(index);
    }

    /// All indices inserted into the cell containing `center` or a cell
    /// within `margin` cells of it, in deterministic cell-scan order.
    ///
    /// An empty result is valid; lookups never fail.
    #[must_use]
    pub fn neighbors_near(&self, center: &Point3<f64>) -> Vec<usize> {
        let gp = GridPoint::from_point(center, &self.origin, self.cell_size);
        let mut found = Vec::new();

        for dx in -self.margin..=self.margin {
            for dy in -self.margin..=self.margin {
                for dz in -self.margin..=self.margin {
                    let neighbor = GridPoint {
                        x: gp.x + dx,
                        y: gp.y + dy,
                        z: gp.z + dz,
                    };
                    if let Some(indices) = self.cells.get(&neighbor) {
                        found.extend_from_slice(indices);
                    }
                }
            }
        }

        found
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
