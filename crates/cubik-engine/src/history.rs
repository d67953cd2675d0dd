//! Undo and redo stacks.

use cubik_core::Move;

use crate::queue::MoveOrigin;

/// Recorded moves (the undo stack) and undone moves (the redo stack).
///
/// Only a [`MoveOrigin::New`] commit clears the redo stack. A redo commit
/// appends to history and leaves the remaining redo entries in place, so
/// several undos can be redone one at a time.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move};
/// use cubik_engine::{MoveHistory, MoveOrigin};
///
/// let a = Move::new(FaceLabel::Up, 2, 1);
/// let b = Move::new(FaceLabel::Right, 2, -1);
/// let mut h = MoveHistory::new();
/// h.record(a, MoveOrigin::New);
/// h.record(b, MoveOrigin::New);
///
/// assert_eq!(h.take_undo(), Some(b));
/// assert_eq!(h.take_undo(), Some(a));
/// assert_eq!(h.take_redo(), Some(a));
/// h.record(a, MoveOrigin::Redo);
/// assert_eq!(h.redo_len(), 1); // `b` is still redoable
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    done: Vec<Move>,
    undone: Vec<Move>,
}

impl MoveHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded from an import, with an empty redo stack.
    pub fn from_moves(done: Vec<Move>) -> Self {
        Self {
            done,
            undone: Vec::new(),
        }
    }

    /// Apply the history effect of committing `mv`.
    ///
    /// Returns `true` if history changed.
    pub fn record(&mut self, mv: Move, origin: MoveOrigin) -> bool {
        match origin {
            MoveOrigin::New => {
                self.done.push(mv);
                self.undone.clear();
                true
            }
            MoveOrigin::Redo => {
                self.done.push(mv);
                true
            }
            MoveOrigin::Unrecorded => false,
        }
    }

    /// Pop the most recent recorded move onto the redo stack and return it.
    pub fn take_undo(&mut self) -> Option<Move> {
        let mv = self.done.pop()?;
        self.undone.push(mv);
        Some(mv)
    }

    /// Reverse of a [`take_undo`](MoveHistory::take_undo) whose inverse
    /// could not be enqueued.
    pub(crate) fn restore_undo(&mut self) {
        if let Some(mv) = self.undone.pop() {
            self.done.push(mv);
        }
    }

    /// Pop the most recent undone move. It returns to history only when
    /// its redo commits.
    pub fn take_redo(&mut self) -> Option<Move> {
        self.undone.pop()
    }

    /// Put back a move taken by [`take_redo`](MoveHistory::take_redo).
    pub(crate) fn restore_redo(&mut self, mv: Move) {
        self.undone.push(mv);
    }

    /// The exact inverse of the recorded history: reversed, each move
    /// inverted.
    pub fn inverse_sequence(&self) -> Vec<Move> {
        self.done.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Recorded moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.done
    }

    /// Undone moves, most recent last.
    pub fn redo_moves(&self) -> &[Move] {
        &self.undone
    }

    /// The most recently recorded move.
    pub fn last(&self) -> Option<Move> {
        self.done.last().copied()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.done.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Number of redoable moves.
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// Clear both stacks.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::FaceLabel;
    use proptest::prelude::*;

    fn m(layer: u32) -> Move {
        Move::new(FaceLabel::Front, layer, 1)
    }

    #[test]
    fn new_move_clears_redo() {
        let mut h = MoveHistory::new();
        h.record(m(0), MoveOrigin::New);
        h.take_undo();
        assert_eq!(h.redo_len(), 1);
        h.record(m(1), MoveOrigin::New);
        assert_eq!(h.redo_len(), 0);
        assert_eq!(h.moves(), &[m(1)]);
    }

    #[test]
    fn unrecorded_leaves_everything() {
        let mut h = MoveHistory::new();
        h.record(m(0), MoveOrigin::New);
        h.take_undo();
        assert!(!h.record(m(2), MoveOrigin::Unrecorded));
        assert!(h.is_empty());
        assert_eq!(h.redo_len(), 1);
    }

    #[test]
    fn undo_on_empty_is_none() {
        let mut h = MoveHistory::new();
        assert_eq!(h.take_undo(), None);
        assert_eq!(h.take_redo(), None);
    }

    #[test]
    fn restore_reverses_take() {
        let mut h = MoveHistory::new();
        h.record(m(0), MoveOrigin::New);
        h.take_undo();
        h.restore_undo();
        assert_eq!(h.moves(), &[m(0)]);
        assert_eq!(h.redo_len(), 0);

        h.take_undo();
        let r = h.take_redo().unwrap();
        h.restore_redo(r);
        assert_eq!(h.redo_moves(), &[m(0)]);
    }

    #[test]
    fn inverse_sequence_reverses_and_negates() {
        let mut h = MoveHistory::new();
        h.record(Move::new(FaceLabel::Up, 0, 1), MoveOrigin::New);
        h.record(Move::new(FaceLabel::Left, 1, 2), MoveOrigin::New);
        assert_eq!(
            h.inverse_sequence(),
            vec![Move::new(FaceLabel::Left, 1, -2), Move::new(FaceLabel::Up, 0, -1)]
        );
    }

    proptest! {
        #[test]
        fn undo_all_then_redo_all_restores(layers in prop::collection::vec(0u32..5, 0..20)) {
            let mut h = MoveHistory::new();
            for &l in &layers {
                h.record(m(l), MoveOrigin::New);
            }
            let before = h.moves().to_vec();
            while h.take_undo().is_some() {}
            while let Some(mv) = h.take_redo() {
                h.record(mv, MoveOrigin::Redo);
            }
            prop_assert_eq!(h.moves(), &before[..]);
        }
    }
}
