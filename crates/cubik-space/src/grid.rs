//! The NxNxN lattice: bounds, flat indexing, boundary rule, layers.

use cubik_core::{Axis, CubeError, FaceLabel, GridSize, Position};
use smallvec::SmallVec;

/// An NxNxN grid of cells addressed by [`Position`].
///
/// Cells are stored row-major with `z` fastest: the flat index of
/// `(x, y, z)` is `(x·N + y)·N + z`, which is also the canonical
/// iteration order used everywhere in the workspace.
///
/// # Examples
///
/// ```
/// use cubik_core::{Axis, FaceLabel, Position};
/// use cubik_space::CubeGrid;
///
/// let grid = CubeGrid::new(3).unwrap();
/// assert_eq!(grid.cell_count(), 27);
///
/// // A corner sits on three faces.
/// let corner = Position::new(2, 2, 2);
/// assert_eq!(
///     grid.boundary_labels(corner).as_slice(),
///     &[FaceLabel::Up, FaceLabel::Front, FaceLabel::Right]
/// );
///
/// // The centre cell carries nothing.
/// assert!(grid.boundary_labels(Position::new(1, 1, 1)).is_empty());
///
/// // Every layer holds N² cells.
/// assert_eq!(grid.layer(Axis::Y, 1).unwrap().len(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeGrid {
    size: GridSize,
}

impl CubeGrid {
    /// Build a grid of edge length `n`.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidSize`] if `n` is zero or above the supported bound.
    pub fn new(n: u32) -> Result<Self, CubeError> {
        Ok(Self::from_size(GridSize::new(n)?))
    }

    /// Wrap an already-validated size.
    pub const fn from_size(size: GridSize) -> Self {
        Self { size }
    }

    /// The edge length.
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// `N`, as a raw integer.
    pub const fn n(&self) -> u32 {
        self.size.get()
    }

    /// Number of cells (`N³`).
    pub const fn cell_count(&self) -> usize {
        self.size.cell_count()
    }

    /// Whether `position` lies inside `[0, N-1]³`.
    pub const fn contains(&self, position: Position) -> bool {
        position.within(self.size)
    }

    /// Flat arena index of `position`.
    ///
    /// # Errors
    ///
    /// [`CubeError::PositionOutOfBounds`] if `position` is outside the grid.
    pub fn index_of(&self, position: Position) -> Result<usize, CubeError> {
        let p = position.check(self.size)?;
        Ok(self.index_unchecked(p))
    }

    /// Flat index without a bounds check. Callers must have validated
    /// `position` against this grid.
    pub(crate) fn index_unchecked(&self, p: Position) -> usize {
        let n = self.n() as usize;
        (p.x as usize * n + p.y as usize) * n + p.z as usize
    }

    /// Inverse of [`index_of`](CubeGrid::index_of). `None` past the end.
    pub fn position_of(&self, index: usize) -> Option<Position> {
        if index >= self.cell_count() {
            return None;
        }
        let n = self.n() as usize;
        let z = index % n;
        let y = (index / n) % n;
        let x = index / (n * n);
        Some(Position::new(x as u32, y as u32, z as u32))
    }

    /// Every position in canonical order (`x`, then `y`, then `z`).
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count()).filter_map(move |i| self.position_of(i))
    }

    /// Whether `position` sits on the outer layer in `label`'s direction.
    pub fn on_boundary(&self, position: Position, label: FaceLabel) -> bool {
        position.coord(label.axis()) == label.boundary_coord(self.n())
    }

    /// The labels a cubie at `position` must carry facelets for, in
    /// [`FaceLabel::ALL`] order.
    ///
    /// For `N = 1` the single cell lies on all six boundaries.
    pub fn boundary_labels(&self, position: Position) -> SmallVec<[FaceLabel; 3]> {
        FaceLabel::ALL
            .into_iter()
            .filter(|&label| self.on_boundary(position, label))
            .collect()
    }

    /// Whether `position` carries any facelet at all.
    pub fn is_surface(&self, position: Position) -> bool {
        FaceLabel::ALL
            .into_iter()
            .any(|label| self.on_boundary(position, label))
    }

    /// The two faces on `axis`, negative side first.
    pub const fn axis_faces(axis: Axis) -> [FaceLabel; 2] {
        match axis {
            Axis::X => [FaceLabel::Left, FaceLabel::Right],
            Axis::Y => [FaceLabel::Down, FaceLabel::Up],
            Axis::Z => [FaceLabel::Back, FaceLabel::Front],
        }
    }

    /// Bounds-check a layer coordinate.
    ///
    /// # Errors
    ///
    /// [`CubeError::LayerOutOfBounds`] if `layer >= N`.
    pub fn check_layer(&self, layer: u32) -> Result<u32, CubeError> {
        if self.size.contains_coord(layer) {
            Ok(layer)
        } else {
            Err(CubeError::LayerOutOfBounds {
                layer,
                size: self.n(),
            })
        }
    }

    /// Compile the set of cells whose `axis` coordinate equals `layer`.
    ///
    /// # Errors
    ///
    /// [`CubeError::LayerOutOfBounds`] if `layer >= N`.
    pub fn layer(&self, axis: Axis, layer: u32) -> Result<LayerPlan, CubeError> {
        let layer = self.check_layer(layer)?;
        let n = self.n();
        let mut positions = Vec::with_capacity(self.size.face_area());
        for a in 0..n {
            for b in 0..n {
                let p = match axis {
                    Axis::X => Position::new(layer, a, b),
                    Axis::Y => Position::new(a, layer, b),
                    Axis::Z => Position::new(a, b, layer),
                };
                positions.push(p);
            }
        }
        let indices = positions.iter().map(|&p| self.index_unchecked(p)).collect();
        Ok(LayerPlan {
            axis,
            layer,
            positions,
            indices,
        })
    }
}

/// A compiled layer: the cells one move rotates.
///
/// Created by [`CubeGrid::layer`]. Positions are in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerPlan {
    /// Rotation axis.
    pub axis: Axis,
    /// Coordinate along `axis`.
    pub layer: u32,
    /// Member positions in canonical order.
    pub positions: Vec<Position>,
    /// `positions[i]` -> flat arena index.
    pub indices: Vec<usize>,
}

impl LayerPlan {
    /// Number of cells in the layer (`N²`).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`: a valid grid has at least one cell per layer.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether `position` belongs to this layer.
    pub fn contains(&self, position: Position) -> bool {
        position.coord(self.axis) == self.layer
    }
}
