//! Compiling a [`Move`] against a grid.

use cubik_core::{CubeError, FaceLabel, Move, Position};
use cubik_space::{CubeGrid, LayerPlan};
use indexmap::IndexMap;

use crate::quarter::QuarterTurn;

/// A validated, ready-to-run move: the layer, the quarter step, and how
/// many times to apply it.
///
/// Half turns run as two quarter steps in the same direction, never as a
/// dedicated 180° map.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move, Position};
/// use cubik_space::CubeGrid;
/// use cubik_turn::TurnPlan;
///
/// let grid = CubeGrid::new(3).unwrap();
/// let plan = TurnPlan::compile(&grid, Move::new(FaceLabel::Up, 2, 1)).unwrap();
/// assert_eq!(plan.layer().len(), 9);
/// assert_eq!(plan.steps(), 1);
///
/// // Front-top edge ends up on the left.
/// assert_eq!(
///     plan.destination(Position::new(1, 2, 2)),
///     Position::new(0, 2, 1)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct TurnPlan {
    grid: CubeGrid,
    mv: Move,
    layer: LayerPlan,
    step: QuarterTurn,
    steps: u32,
}

impl TurnPlan {
    /// Validate `mv` against `grid` and select its layer.
    ///
    /// # Errors
    ///
    /// [`CubeError::LayerOutOfBounds`] if the layer lies outside the grid.
    pub fn compile(grid: &CubeGrid, mv: Move) -> Result<Self, CubeError> {
        let mv = mv.check(grid.size())?;
        let layer = grid.layer(mv.axis(), mv.layer())?;
        Ok(Self {
            grid: *grid,
            mv,
            layer,
            step: QuarterTurn::new(mv.axis(), mv.direction()),
            steps: mv.quarter_steps(),
        })
    }

    /// The move this plan executes.
    pub const fn mv(&self) -> Move {
        self.mv
    }

    /// The cells the move rotates.
    pub const fn layer(&self) -> &LayerPlan {
        &self.layer
    }

    /// The unit step.
    pub const fn step(&self) -> QuarterTurn {
        self.step
    }

    /// Number of unit steps (`0` for a no-op).
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether running the plan would change nothing.
    pub const fn is_noop(&self) -> bool {
        self.steps == 0
    }

    /// Total signed rotation about `+axis`, in quarter turns. Positive is
    /// clockwise as seen from outside the positive face.
    pub fn signed_quarters(&self) -> i32 {
        self.step.direction() * self.steps as i32
    }

    /// Where a cell of the layer ends up. Cells outside the layer, and
    /// every cell of a no-op plan, stay where they are.
    pub fn destination(&self, position: Position) -> Position {
        if !self.layer.contains(position) {
            return position;
        }
        let mut c = self.grid.doubled(position);
        for _ in 0..self.steps {
            c = self.step.rotate(c);
        }
        // A rotation about the grid centre maps cells onto cells.
        self.grid.from_doubled(c).unwrap_or(position)
    }

    /// The label a facelet keyed under `label` ends up under.
    pub fn relabel(&self, label: FaceLabel) -> FaceLabel {
        (0..self.steps).fold(label, |l, _| self.step.relabel(l))
    }

    /// `source -> destination` for every cell of the layer, in canonical
    /// source order.
    pub fn permutation(&self) -> IndexMap<Position, Position> {
        self.layer
            .positions
            .iter()
            .map(|&p| (p, self.destination(p)))
            .collect()
    }
}
