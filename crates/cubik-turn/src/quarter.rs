//! The 90° step every turn is built from.

use cubik_core::{Axis, FaceLabel};

use crate::relabel::relabel;

/// One quarter turn about a principal axis.
///
/// `direction = +1` is clockwise as seen from outside the positive face
/// of `axis` (a -90° rotation about `+axis`); `-1` is the reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuarterTurn {
    axis: Axis,
    direction: i32,
}

impl QuarterTurn {
    /// A quarter turn about `axis`. Any positive `direction` is `+1`,
    /// anything else is `-1`.
    pub const fn new(axis: Axis, direction: i32) -> Self {
        Self {
            axis,
            direction: if direction > 0 { 1 } else { -1 },
        }
    }

    /// The rotation axis.
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// `+1` or `-1`.
    pub const fn direction(self) -> i32 {
        self.direction
    }

    /// The opposite step.
    pub const fn inverse(self) -> Self {
        Self {
            axis: self.axis,
            direction: -self.direction,
        }
    }

    /// Rotate an integer vector (a doubled centred position or a normal).
    ///
    /// ```
    /// use cubik_core::Axis;
    /// use cubik_turn::QuarterTurn;
    ///
    /// // Clockwise seen from above: front goes to left.
    /// let u = QuarterTurn::new(Axis::Y, 1);
    /// assert_eq!(u.rotate([0, 2, 2]), [-2, 2, 0]);
    /// ```
    pub const fn rotate(self, v: [i32; 3]) -> [i32; 3] {
        rotate(v, self.axis, self.direction)
    }

    /// Where a facelet keyed under `label` points after this step.
    pub fn relabel(self, label: FaceLabel) -> FaceLabel {
        relabel(label, self.axis, self.direction)
    }
}

/// Raw 90° rotation. `direction > 0` is -90° about `+axis`.
pub(crate) const fn rotate(v: [i32; 3], axis: Axis, direction: i32) -> [i32; 3] {
    let [x, y, z] = v;
    match (axis, direction > 0) {
        (Axis::X, true) => [x, z, -y],
        (Axis::X, false) => [x, -z, y],
        (Axis::Y, true) => [-z, y, x],
        (Axis::Y, false) => [z, y, -x],
        (Axis::Z, true) => [y, -x, z],
        (Axis::Z, false) => [-y, x, z],
    }
}
