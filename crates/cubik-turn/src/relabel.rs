//! Facelet relabelling: which face a sticker covers after a quarter turn.
//!
//! The rule is geometric: rotate the label's outward normal by the same
//! quarter turn the cubie undergoes and snap to the nearest of the six
//! face normals. Since inputs are axis-aligned and steps are exact 90°
//! multiples, the answer depends only on `(label, axis, direction)`, so
//! the whole map is evaluated once at compile time.

use cubik_core::{Axis, FaceLabel};

use crate::quarter::rotate;

/// `TABLE[axis][dir][label]`, `dir` 0 for `+1` and 1 for `-1`.
const TABLE: [[[FaceLabel; 6]; 2]; 3] = build_table();

const fn build_table() -> [[[FaceLabel; 6]; 2]; 3] {
    let mut table = [[[FaceLabel::Up; 6]; 2]; 3];
    let mut a = 0;
    while a < 3 {
        let mut d = 0;
        while d < 2 {
            let direction = if d == 0 { 1 } else { -1 };
            let mut l = 0;
            while l < 6 {
                let normal = FaceLabel::ALL[l].normal();
                table[a][d][l] = FaceLabel::nearest(rotate(normal, Axis::ALL[a], direction));
                l += 1;
            }
            d += 1;
        }
        a += 1;
    }
    table
}

/// The label a facelet keyed under `label` moves to after one quarter turn
/// about `axis` in `direction` (`> 0` for `+1`).
///
/// ```
/// use cubik_core::{Axis, FaceLabel};
/// use cubik_turn::relabel;
///
/// // A clockwise Up turn carries the front face's stickers to the left.
/// assert_eq!(relabel(FaceLabel::Front, Axis::Y, 1), FaceLabel::Left);
/// // Faces on the axis stay put.
/// assert_eq!(relabel(FaceLabel::Up, Axis::Y, 1), FaceLabel::Up);
/// ```
pub fn relabel(label: FaceLabel, axis: Axis, direction: i32) -> FaceLabel {
    let d = if direction > 0 { 0 } else { 1 };
    TABLE[axis.index()][d][label.index()]
}

/// Reference implementation: rotate the normal and scan all six labels.
pub fn relabel_by_scan(label: FaceLabel, axis: Axis, direction: i32) -> FaceLabel {
    FaceLabel::nearest(rotate(label.normal(), axis, direction))
}
