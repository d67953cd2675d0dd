//! Read-only access to a cube's facelet assignment.

use crate::face::FaceLabel;
use crate::id::{Facelet, GridSize, Position};

/// Read-only view of a cube's facelet assignment.
///
/// This decouples consumers that only read state (hashing, render frames,
/// export) from the arena that owns it. Implementors must answer for every
/// position in `[0, N-1]³` and return `None` outside it.
pub trait CubeView {
    /// Edge length of the viewed cube.
    fn grid_size(&self) -> GridSize;

    /// The facelet currently stored under `label` at `position`, if any.
    fn facelet(&self, position: Position, label: FaceLabel) -> Option<Facelet>;

    /// Visit every `(position, label, facelet)` in canonical order:
    /// `x`, then `y`, then `z` ascending, labels in [`FaceLabel::ALL`] order.
    fn for_each_facelet(&self, f: &mut dyn FnMut(Position, FaceLabel, Facelet)) {
        let n = self.grid_size().get();
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let position = Position::new(x, y, z);
                    for label in FaceLabel::ALL {
                        if let Some(facelet) = self.facelet(position, label) {
                            f(position, label, facelet);
                        }
                    }
                }
            }
        }
    }
}
