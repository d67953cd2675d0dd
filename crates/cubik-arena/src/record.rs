//! Conversion between [`CubeState`] and the plain [`StateRecord`].

use cubik_core::{
    CubeError, CubieRecord, Facelet, FaceletId, GridSize, Move, Position, StateRecord,
};
use cubik_space::CubeGrid;
use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::state::CubeState;

impl CubeState {
    /// Export the facelet assignment together with `history`.
    ///
    /// Only cells that carry facelets are listed, in canonical order.
    pub fn to_record(&self, history: &[Move]) -> StateRecord {
        let cubies = self
            .iter()
            .filter(|(_, c)| !c.is_empty())
            .map(|(position, c)| CubieRecord {
                position,
                facelets: c.iter().map(|(label, f)| (label, f.id)).collect::<SmallVec<_>>(),
            })
            .collect();
        StateRecord {
            size: self.size().get(),
            cubies,
            history: history.to_vec(),
        }
    }

    /// Rebuild a state from `record`, validating it completely first.
    ///
    /// A fresh grid is built for `record.size` and the listed facelets are
    /// installed into it; unlisted cells stay empty. The result must satisfy
    /// the boundary invariant and hold each facelet identity exactly once.
    /// Recorded moves must address layers inside the grid.
    ///
    /// # Errors
    ///
    /// - [`CubeError::InvalidSize`] if `record.size` is zero or too large.
    /// - [`CubeError::MalformedState`] for anything inconsistent with the
    ///   size: out-of-range or repeated positions, repeated labels within a
    ///   cubie, unknown or repeated facelet identities, boundary violations,
    ///   or history moves outside the grid.
    pub fn from_record(record: &StateRecord) -> Result<Self, CubeError> {
        let size = GridSize::new(record.size)?;
        let grid = CubeGrid::from_size(size);
        let mut state = CubeState::blank(grid);

        let mut positions: IndexSet<Position> = IndexSet::with_capacity(record.cubies.len());
        let mut ids: IndexSet<FaceletId> = IndexSet::with_capacity(size.facelet_count());
        for entry in &record.cubies {
            if !grid.contains(entry.position) {
                return Err(CubeError::malformed(format!(
                    "cubie position {} lies outside a size-{size} grid",
                    entry.position
                )));
            }
            if !positions.insert(entry.position) {
                return Err(CubeError::malformed(format!(
                    "cubie position {} listed twice",
                    entry.position
                )));
            }
            let cubie = state.get_mut(entry.position)?;
            for &(label, id) in &entry.facelets {
                if usize::from(id.index) >= size.face_area() {
                    return Err(CubeError::malformed(format!(
                        "facelet {id} has an index beyond {} per face",
                        size.face_area()
                    )));
                }
                if !ids.insert(id) {
                    return Err(CubeError::malformed(format!("facelet {id} appears twice")));
                }
                if cubie.set(label, Facelet::new(id)).is_some() {
                    return Err(CubeError::malformed(format!(
                        "cubie {} lists label {label} twice",
                        entry.position
                    )));
                }
            }
        }

        state.check_boundary()?;

        for (i, mv) in record.history.iter().enumerate() {
            mv.check(size).map_err(|e| {
                CubeError::malformed(format!("history move {i} ({mv}) is invalid: {e}"))
            })?;
        }

        Ok(state)
    }
}
