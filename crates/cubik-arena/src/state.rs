//! The mutable logical cube: N³ cubies in a flat arena.

use cubik_core::{CubeError, CubeView, FaceLabel, Facelet, FaceletId, GridSize, Position};
use cubik_space::CubeGrid;

use crate::cubie::Cubie;

/// The full facelet assignment of one cube.
///
/// Built solved by [`CubeState::build`]: every surface cell carries one
/// facelet per boundary it sits on, stored under that boundary's label and
/// coloured with it. Facelet indices are handed out per colour in
/// canonical cell order, so the same `N` always yields the same identities.
///
/// # Examples
///
/// ```
/// use cubik_arena::CubeState;
/// use cubik_core::{FaceLabel, Position};
///
/// let state = CubeState::build(3).unwrap();
/// assert_eq!(state.facelet_count(), 54);
/// assert!(state.is_solved());
///
/// let corner = state.get(Position::new(0, 0, 0)).unwrap();
/// assert_eq!(corner.len(), 3);
/// assert!(corner.get(FaceLabel::Left).is_some());
///
/// assert!(state.get(Position::new(3, 0, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    grid: CubeGrid,
    cells: Vec<Cubie>,
    generation: u64,
}

impl CubeState {
    /// Allocate a solved cube of edge length `n`.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidSize`] if `n` is zero or above the supported
    /// bound. Callers clamp or reject before calling.
    pub fn build(n: u32) -> Result<Self, CubeError> {
        Ok(Self::solved(CubeGrid::new(n)?))
    }

    /// A solved cube over an existing grid.
    pub fn solved(grid: CubeGrid) -> Self {
        let mut cells = vec![Cubie::empty(); grid.cell_count()];
        let mut next_index = [0u16; 6];
        for (cell, position) in cells.iter_mut().zip(grid.canonical_ordering()) {
            for label in grid.boundary_labels(position) {
                let slot = &mut next_index[label.index()];
                cell.set(label, Facelet::new(FaceletId::new(label, *slot)));
                *slot += 1;
            }
        }
        Self {
            grid,
            cells,
            generation: 0,
        }
    }

    /// An empty arena of the right shape. Only the record importer uses
    /// this, filling it before validation.
    pub(crate) fn blank(grid: CubeGrid) -> Self {
        Self {
            grid,
            cells: vec![Cubie::empty(); grid.cell_count()],
            generation: 0,
        }
    }

    /// The grid this state is laid out on.
    pub const fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    /// Edge length.
    pub const fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Number of successful [`replace`](CubeState::replace) calls since
    /// the state was built.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The cubie at `position`.
    ///
    /// # Errors
    ///
    /// [`CubeError::PositionOutOfBounds`] if `position` is outside `[0, N-1]³`.
    pub fn get(&self, position: Position) -> Result<&Cubie, CubeError> {
        let i = self.grid.index_of(position)?;
        Ok(&self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Result<&mut Cubie, CubeError> {
        let i = self.grid.index_of(position)?;
        Ok(&mut self.cells[i])
    }

    /// All cubies in canonical order.
    pub fn cells(&self) -> &[Cubie] {
        &self.cells
    }

    /// `(position, cubie)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cubie)> + '_ {
        self.grid.canonical_ordering().zip(self.cells.iter())
    }

    /// Atomically swap in a complete new assignment.
    ///
    /// Readers see either the old cells or the new ones, never a mix:
    /// the swap happens under `&mut self` in a single assignment.
    ///
    /// # Errors
    ///
    /// [`CubeError::MalformedState`] if `cells` does not hold exactly `N³`
    /// cubies. The current state is left untouched.
    pub fn replace(&mut self, cells: Vec<Cubie>) -> Result<(), CubeError> {
        if cells.len() != self.cells.len() {
            return Err(CubeError::malformed(format!(
                "replacement holds {} cubies, grid has {}",
                cells.len(),
                self.cells.len()
            )));
        }
        self.cells = cells;
        self.generation += 1;
        Ok(())
    }

    /// Total facelets carried by all cubies.
    pub fn facelet_count(&self) -> usize {
        self.cells.iter().map(Cubie::len).sum()
    }

    /// Whether every facelet sits under its own colour's label.
    ///
    /// Reaching this state through moves means every face shows one
    /// colour; it does not imply facelets are back in their original cells.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cubie::is_home)
    }

    /// Check the boundary invariant: a cubie carries a facelet under `L`
    /// exactly when it sits on `L`'s boundary.
    ///
    /// # Errors
    ///
    /// [`CubeError::MalformedState`] naming the first offending cell.
    pub fn check_boundary(&self) -> Result<(), CubeError> {
        for (position, cubie) in self.iter() {
            for label in FaceLabel::ALL {
                let expected = self.grid.on_boundary(position, label);
                let present = cubie.get(label).is_some();
                if expected != present {
                    return Err(CubeError::malformed(if expected {
                        format!("cell {position} is missing its {label} facelet")
                    } else {
                        format!("cell {position} carries a {label} facelet off the boundary")
                    }));
                }
            }
        }
        Ok(())
    }
}

impl CubeView for CubeState {
    fn grid_size(&self) -> GridSize {
        self.grid.size()
    }

    fn facelet(&self, position: Position, label: FaceLabel) -> Option<Facelet> {
        self.get(position).ok().and_then(|c| c.get(label))
    }

    fn for_each_facelet(&self, f: &mut dyn FnMut(Position, FaceLabel, Facelet)) {
        for (position, cubie) in self.iter() {
            for (label, facelet) in cubie.iter() {
                f(position, label, facelet);
            }
        }
    }
}
