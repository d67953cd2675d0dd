//! Hashing of cube state for replay comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of the full facelet
//! assignment. These hashes are not cryptographically secure; they are
//! used for fast equality checks during replay.

use cubik_core::CubeView;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the full facelet assignment of `view`.
///
/// Folds in the grid size, then every `(position, label, facelet)` in
/// canonical order. Two views hash equal iff (barring collisions) they
/// have the same size and every facelet sits in the same slot.
///
/// # Examples
///
/// ```
/// use cubik_arena::CubeState;
/// use cubik_replay::state_hash;
///
/// let a = CubeState::build(3).unwrap();
/// let b = CubeState::build(3).unwrap();
/// let c = CubeState::build(4).unwrap();
/// assert_eq!(state_hash(&a), state_hash(&b));
/// assert_ne!(state_hash(&a), state_hash(&c));
/// ```
pub fn state_hash(view: &dyn CubeView) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, &view.grid_size().get().to_le_bytes());
    view.for_each_facelet(&mut |position, label, facelet| {
        for c in position.to_array() {
            hash = fnv1a_bytes(hash, &c.to_le_bytes());
        }
        hash = fnv1a_byte(hash, label.index() as u8);
        hash = fnv1a_byte(hash, facelet.id.color.index() as u8);
        hash = fnv1a_bytes(hash, &facelet.id.index.to_le_bytes());
    });
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::{FaceLabel, Facelet, FaceletId, GridSize, Position};
    use cubik_test_utils::MockCubeView;

    fn size(n: u32) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn same_assignment_same_hash() {
        let a = MockCubeView::solved(size(3));
        let b = MockCubeView::solved(size(3));
        assert_eq!(state_hash(&a), state_hash(&b));
    }

    #[test]
    fn moved_facelet_changes_hash() {
        let a = MockCubeView::solved(size(2));
        let mut b = MockCubeView::solved(size(2));
        let p = Position::new(0, 0, 0);
        let f = b.clear(p, FaceLabel::Down).unwrap();
        b.set(p, FaceLabel::Back, f);
        assert_ne!(state_hash(&a), state_hash(&b));
    }

    #[test]
    fn swapped_identities_change_hash() {
        let a = MockCubeView::solved(size(2));
        let mut b = MockCubeView::solved(size(2));
        let p = Position::new(1, 1, 1);
        b.set(p, FaceLabel::Up, Facelet::new(FaceletId::new(FaceLabel::Up, 2)));
        b.set(
            Position::new(0, 1, 1),
            FaceLabel::Up,
            Facelet::new(FaceletId::new(FaceLabel::Up, 3)),
        );
        assert_ne!(state_hash(&a), state_hash(&b));
    }

    #[test]
    fn empty_view_hash_depends_only_on_size() {
        let a = MockCubeView::new(size(1));
        let b = MockCubeView::new(size(1));
        assert_eq!(state_hash(&a), state_hash(&b));
        assert_eq!(
            state_hash(&a),
            fnv1a_bytes(FNV_OFFSET, &1u32.to_le_bytes())
        );
    }
}
