//! Per-atom accessible surface area (ASA) via Shrake-Rupley sampling.
//!
//! For every atom in an immutable coordinate/radius snapshot, this library
//! estimates how much of the atom's probe-expanded sphere stays exposed to
//! solvent: deterministic golden-spiral sample points are projected onto the
//! expanded sphere and tested against the expanded spheres of overlapping
//! neighbors, found in near-constant time through a uniform spatial hash
//! grid. The surviving fraction converts directly into a surface area.
//!
//! # Example
//!
//! ```
//! use rupley::{AsaCalculator, Ball};
//!
//! let atoms = vec![
//!     Ball::new(0.0, 0.0, 0.0, 1.5),
//!     Ball::new(3.0, 0.0, 0.0, 1.5),
//! ];
//!
//! let calc = AsaCalculator::with_defaults(atoms)?;
//!
//! for (index, area) in calc.accessible_surface_areas().iter().enumerate() {
//!     match area {
//!         Some(area) => println!("atom {index}: {area:.2} A^2"),
//!         None => println!("atom {index}: ignored"),
//!     }
//! }
//! # Ok::<(), rupley::ConfigError>(())
//! ```

mod calculator;
mod containment;
mod geometry;
mod golden_spiral;
pub mod input;
mod types;
mod voxel_grid;

pub use calculator::{AsaCalculator, AsaParams};
pub use containment::Checker;
pub use golden_spiral::GoldenSpiral;
pub use types::{AtomArrays, AtomSource, Ball, ConfigError, QueryError};
pub use voxel_grid::VoxelGrid;
