//! The [`Move`] value type submitted to the engine.

use std::fmt;

use crate::error::CubeError;
use crate::face::{Axis, FaceLabel};
use crate::id::{GridSize, Position};

/// Reduce a signed turn count modulo 4 into `[-2, 2]`.
///
/// Three quarter turns become one negative quarter turn; a half turn keeps
/// the sign it was given so that `-2` survives as `-2`.
///
/// ```
/// use cubik_core::canonical_turns;
///
/// assert_eq!(canonical_turns(3), -1);
/// assert_eq!(canonical_turns(-3), 1);
/// assert_eq!(canonical_turns(-2), -2);
/// assert_eq!(canonical_turns(6), 2);
/// assert_eq!(canonical_turns(8), 0);
/// ```
pub fn canonical_turns(turns: i32) -> i8 {
    match turns.rem_euclid(4) {
        0 => 0,
        1 => 1,
        2 if turns < 0 => -2,
        2 => 2,
        _ => -1,
    }
}

/// A layer turn: rotate the layer at `layer` along `face`'s axis by
/// `turns` quarter turns, clockwise as seen from outside `face`.
///
/// `layer` is the absolute coordinate along the axis, not a depth from
/// the face. Moves are immutable once built; `turns` is canonicalized
/// into `[-2, 2]` on construction.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, GridSize, Move};
///
/// let n = GridSize::new(3).unwrap();
/// let u = Move::outer(FaceLabel::Up, 1, n);
/// assert_eq!(u.layer(), 2);
/// assert_eq!(u.inverse().turns(), -1);
/// assert_eq!(u.to_string(), "U@2");
/// assert_eq!(Move::new(FaceLabel::Right, 0, 7).to_string(), "R'@0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    face: FaceLabel,
    layer: u32,
    turns: i8,
}

impl Move {
    /// Build a move, canonicalizing `turns`.
    pub fn new(face: FaceLabel, layer: u32, turns: i32) -> Self {
        Self {
            face,
            layer,
            turns: canonical_turns(turns),
        }
    }

    /// Turn the outermost layer of `face`.
    pub fn outer(face: FaceLabel, turns: i32, size: GridSize) -> Self {
        Self::new(face, face.boundary_coord(size.get()), turns)
    }

    /// Derive a move from a picked facelet: the axis comes from `label`,
    /// the layer from `position`'s coordinate along that axis.
    ///
    /// # Errors
    ///
    /// [`CubeError::PositionOutOfBounds`] if `position` is outside the grid.
    pub fn from_pick(
        position: Position,
        label: FaceLabel,
        turns: i32,
        size: GridSize,
    ) -> Result<Self, CubeError> {
        let position = position.check(size)?;
        Ok(Self::new(label, position.coord(label.axis()), turns))
    }

    /// The face whose clockwise sense defines the turn direction.
    pub const fn face(self) -> FaceLabel {
        self.face
    }

    /// Absolute layer coordinate along [`axis`](Move::axis).
    pub const fn layer(self) -> u32 {
        self.layer
    }

    /// Canonical signed quarter-turn count in `[-2, 2]`.
    pub const fn turns(self) -> i8 {
        self.turns
    }

    /// The rotation axis.
    pub const fn axis(self) -> Axis {
        self.face.axis()
    }

    /// The algebraic inverse: same face and layer, negated turns.
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            layer: self.layer,
            turns: -self.turns,
        }
    }

    /// Whether the move leaves every cube unchanged.
    pub const fn is_noop(self) -> bool {
        self.turns == 0
    }

    /// Number of 90° steps the move executes (`|turns|`).
    pub const fn quarter_steps(self) -> u32 {
        self.turns.unsigned_abs() as u32
    }

    /// Rotation sense about the positive axis: `+1` clockwise looking down
    /// `+axis` from outside, `-1` counter-clockwise, `0` for a no-op.
    pub const fn direction(self) -> i32 {
        self.face.orientation() * (self.turns as i32).signum()
    }

    /// Bounds-check the layer against `size`.
    ///
    /// # Errors
    ///
    /// [`CubeError::LayerOutOfBounds`] if `layer >= N`.
    pub fn check(self, size: GridSize) -> Result<Self, CubeError> {
        if size.contains_coord(self.layer) {
            Ok(self)
        } else {
            Err(CubeError::LayerOutOfBounds {
                layer: self.layer,
                size: size.get(),
            })
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turns {
            0 => "0",
            1 => "",
            -1 => "'",
            2 => "2",
            _ => "2'",
        };
        write!(f, "{}{}@{}", self.face, suffix, self.layer)
    }
}
