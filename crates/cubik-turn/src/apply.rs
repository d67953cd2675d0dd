//! Running a [`TurnPlan`] against a [`CubeState`].

use cubik_arena::{CubeState, Cubie};
use cubik_core::{CubeError, FaceLabel, Facelet, Move, Position};

use crate::plan::TurnPlan;

/// The result of a turn that has been computed but not yet committed.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    plan: TurnPlan,
    cells: Vec<Cubie>,
    affected: Vec<(Position, FaceLabel, Facelet)>,
}

impl TurnOutcome {
    /// The plan that produced this outcome.
    pub fn plan(&self) -> &TurnPlan {
        &self.plan
    }

    /// The move executed.
    pub fn mv(&self) -> Move {
        self.plan.mv()
    }

    /// The complete post-move assignment, in canonical order.
    pub fn cells(&self) -> &[Cubie] {
        &self.cells
    }

    /// Every facelet on the rotated layer, as it sat *before* the move:
    /// `(position, label, facelet)` in canonical order.
    pub fn affected(&self) -> &[(Position, FaceLabel, Facelet)] {
        &self.affected
    }

    /// Number of cubies on the rotated layer that carry facelets.
    pub fn affected_cubies(&self) -> usize {
        let mut count = 0;
        let mut last = None;
        for &(p, _, _) in &self.affected {
            if last != Some(p) {
                count += 1;
                last = Some(p);
            }
        }
        count
    }

    /// Swap the new assignment into `state`.
    ///
    /// # Errors
    ///
    /// [`CubeError::MalformedState`] if `state` has a different size from
    /// the one this outcome was computed on. `state` is left untouched.
    pub fn commit(self, state: &mut CubeState) -> Result<(), CubeError> {
        state.replace(self.cells)
    }
}

/// Compute the effect of `mv` on `state` without mutating it.
///
/// Every cubie of the selected layer is moved to its rotated position and
/// its facelets are re-keyed by the same rotation; all other cells are
/// copied as they are. A zero-turn move yields an unchanged copy with an
/// empty affected set.
///
/// # Errors
///
/// [`CubeError::LayerOutOfBounds`] if `mv.layer()` lies outside the grid.
/// Validation happens before any work is done.
///
/// # Examples
///
/// ```
/// use cubik_arena::CubeState;
/// use cubik_core::{FaceLabel, Move};
/// use cubik_turn::apply_turn;
///
/// let mut state = CubeState::build(3).unwrap();
/// let outcome = apply_turn(&state, Move::new(FaceLabel::Up, 2, 1)).unwrap();
/// assert_eq!(outcome.affected().len(), 21);
/// outcome.commit(&mut state).unwrap();
/// assert!(!state.is_solved());
///
/// let back = apply_turn(&state, Move::new(FaceLabel::Up, 2, -1)).unwrap();
/// back.commit(&mut state).unwrap();
/// assert_eq!(state.cells(), CubeState::build(3).unwrap().cells());
/// assert_eq!(state.generation(), 2);
/// ```
pub fn apply_turn(state: &CubeState, mv: Move) -> Result<TurnOutcome, CubeError> {
    let grid = *state.grid();
    let plan = TurnPlan::compile(&grid, mv)?;
    let mut cells = state.cells().to_vec();
    let mut affected = Vec::new();

    if !plan.is_noop() {
        let sources = &plan.layer().indices;
        for ((source, destination), &index) in plan.permutation().into_iter().zip(sources) {
            let cubie = state.cells()[index];
            affected.extend(cubie.iter().map(|(label, f)| (source, label, f)));
            cells[grid.index_of(destination)?] = cubie.relabeled(|label| plan.relabel(label));
        }
    }

    Ok(TurnOutcome {
        plan,
        cells,
        affected,
    })
}
