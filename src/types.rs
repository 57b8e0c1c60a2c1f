use nalgebra::Point3;

/// Input atom (center + radius), user-facing type.
///
/// A negative radius marks the atom as excluded: it is never indexed, never
/// occludes a neighbor, and querying it fails with [`QueryError::Ignored`].
///
/// [`QueryError::Ignored`]: crate::QueryError::Ignored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: f64,
}

impl Ball {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, r: f64) -> Self {
        Self { x, y, z, r }
    }

    pub(crate) const fn center(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

/// Read-only view of an indexed atom snapshot.
///
/// Replaces the original compile-time accessor parametrization: any storage
/// that can hand out a coordinate and a radius per index can drive the
/// calculator.
pub trait AtomSource {
    fn len(&self) -> usize;

    fn coordinate(&self, index: usize) -> Point3<f64>;

    fn radius(&self, index: usize) -> f64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AtomSource for [Ball] {
    fn len(&self) -> usize {
        <[Ball]>::len(self)
    }

    fn coordinate(&self, index: usize) -> Point3<f64> {
        self[index].center()
    }

    fn radius(&self, index: usize) -> f64 {
        self[index].r
    }
}

impl AtomSource for Vec<Ball> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn coordinate(&self, index: usize) -> Point3<f64> {
        self[index].center()
    }

    fn radius(&self, index: usize) -> f64 {
        self[index].r
    }
}

impl<S: AtomSource + ?Sized> AtomSource for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn coordinate(&self, index: usize) -> Point3<f64> {
        (**self).coordinate(index)
    }

    fn radius(&self, index: usize) -> f64 {
        (**self).radius(index)
    }
}

/// Adapter over separate coordinate and radius arrays.
///
/// This is the boundary with whatever owns the molecular model: it supplies
/// index-aligned arrays and the constructor enforces that alignment.
#[derive(Debug, Clone)]
pub struct AtomArrays {
    coordinates: Vec<Point3<f64>>,
    radii: Vec<f64>,
}

impl AtomArrays {
    /// Build from index-aligned arrays.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LengthMismatch`] if the arrays differ in length.
    pub fn new(coordinates: Vec<Point3<f64>>, radii: Vec<f64>) -> Result<Self, ConfigError> {
        if coordinates.len() != radii.len() {
            return Err(ConfigError::LengthMismatch {
                coordinates: coordinates.len(),
                radii: radii.len(),
            });
        }
        Ok(Self { coordinates, radii })
    }
}

impl AtomSource for AtomArrays {
    fn len(&self) -> usize {
        self.coordinates.len()
    }

    fn coordinate(&self, index: usize) -> Point3<f64> {
        self.coordinates[index]
    }

    fn radius(&self, index: usize) -> f64 {
        self.radii[index]
    }
}

/// Construction-time configuration error.
///
/// Never recoverable internally: the caller must fix the configuration and
/// rebuild the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Coordinate and radius arrays are not index-aligned.
    LengthMismatch { coordinates: usize, radii: usize },
    /// Sphere sampling needs at least one point.
    InvalidSampleCount(usize),
    /// Grid cells must have positive, finite extent.
    InvalidCellSize(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { coordinates, radii } => write!(
                f,
                "coordinate/radius arrays are not aligned: {coordinates} coordinates, {radii} radii"
            ),
            Self::InvalidSampleCount(n) => {
                write!(f, "invalid sample point count: {n} (must be positive)")
            }
            Self::InvalidCellSize(s) => {
                write!(f, "invalid grid cell size: {s} (must be positive and finite)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Query-time error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The atom carries the negative-radius "ignore" sentinel.
    Ignored { index: usize },
    /// The index does not address an atom of this snapshot.
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored { index } => {
                write!(f, "atom {index} is set to ignore (negative radius)")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "atom index {index} out of range for {len} atoms")
            }
        }
    }
}

impl std::error::Error for QueryError {}
