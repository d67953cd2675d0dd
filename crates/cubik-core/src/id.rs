//! Strongly-typed grid sizes, positions, and facelet identifiers.

use std::fmt;

use crate::error::CubeError;
use crate::face::{Axis, FaceLabel};

/// Largest supported grid size. Interactive callers clamp to this bound.
pub const MAX_GRID_SIZE: u32 = 20;

/// Edge length `N` of an NxNxN cube, guaranteed in `1..=MAX_GRID_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSize(u32);

impl GridSize {
    /// Validate and wrap `n`.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidSize`] if `n` is zero or above [`MAX_GRID_SIZE`].
    pub fn new(n: u32) -> Result<Self, CubeError> {
        if n == 0 || n > MAX_GRID_SIZE {
            return Err(CubeError::InvalidSize {
                size: n,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(Self(n))
    }

    /// Clamp an arbitrary user value into the supported range.
    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(1, i64::from(MAX_GRID_SIZE)) as u32)
    }

    /// The raw edge length.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Largest valid coordinate on any axis (`N - 1`).
    pub const fn max_coord(self) -> u32 {
        self.0 - 1
    }

    /// Number of cells in the grid (`N³`).
    pub const fn cell_count(self) -> usize {
        let n = self.0 as usize;
        n * n * n
    }

    /// Number of facelets on one face (`N²`).
    pub const fn face_area(self) -> usize {
        let n = self.0 as usize;
        n * n
    }

    /// Total number of facelets on the cube (`6·N²`).
    pub const fn facelet_count(self) -> usize {
        6 * self.face_area()
    }

    /// Whether `coord` is a valid coordinate on any axis.
    pub const fn contains_coord(self, coord: u32) -> bool {
        coord < self.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell of the logical grid, each component in `[0, N-1]`.
///
/// Positions are plain values; bounds are checked against a [`GridSize`]
/// wherever a position enters the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Left (0) to right (N-1).
    pub x: u32,
    /// Down (0) to up (N-1).
    pub y: u32,
    /// Back (0) to front (N-1).
    pub z: u32,
}

impl Position {
    /// Construct a position from its components.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    pub const fn coord(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Components as an `[x, y, z]` array.
    pub const fn to_array(self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }

    /// Inverse of [`to_array`](Position::to_array).
    pub const fn from_array(a: [u32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Whether every component is below `size`.
    pub const fn within(self, size: GridSize) -> bool {
        size.contains_coord(self.x) && size.contains_coord(self.y) && size.contains_coord(self.z)
    }

    /// Bounds-check against `size`.
    ///
    /// # Errors
    ///
    /// [`CubeError::PositionOutOfBounds`] if any component is `>= N`.
    pub fn check(self, size: GridSize) -> Result<Self, CubeError> {
        if self.within(size) {
            Ok(self)
        } else {
            Err(CubeError::PositionOutOfBounds {
                position: self,
                size: size.get(),
            })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Stable identity of a sticker: the face it was created on plus an index
/// unique within that face (`0..N²`, canonical order at build time).
///
/// The identity never changes as the sticker travels; its colour is
/// `color.color()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceletId {
    /// The face the sticker was created on, which fixes its colour.
    pub color: FaceLabel,
    /// Index unique within `color`.
    pub index: u16,
}

impl FaceletId {
    /// Construct an identifier.
    pub const fn new(color: FaceLabel, index: u16) -> Self {
        Self { color, index }
    }
}

impl fmt::Display for FaceletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.index)
    }
}

/// A single coloured sticker owned by one cubie.
///
/// The label a facelet is stored under lives in its cubie, not here:
/// rotation re-keys the facelet, it never edits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Facelet {
    /// Stable identity (and therefore colour).
    pub id: FaceletId,
}

impl Facelet {
    /// A facelet with the given identity.
    pub const fn new(id: FaceletId) -> Self {
        Self { id }
    }

    /// The colour identity fixed at creation.
    pub const fn color(self) -> FaceLabel {
        self.id.color
    }
}
