//! Move lifecycle tracking shared between a session and its observers.
//!
//! Sequence numbers are issued in order and moves leave the queue in
//! order, so a handful of watermarks place every sequence number in its
//! [`MovePhase`] without per-move bookkeeping. [`PhaseTracker`] keeps them
//! in atomics so a worker handle or an animator on another thread can ask
//! while a move is animating.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::queue::MovePhase;

/// Sentinel meaning "no move is animating."
const NOT_ANIMATING: u64 = u64::MAX;

/// Shared view of where each submitted move is in its lifecycle.
///
/// Obtained from [`CubeSession::phases`](crate::CubeSession::phases) or
/// [`CubeWorker::phases`](crate::CubeWorker::phases). Only the owning
/// session writes to it.
#[derive(Debug)]
pub struct PhaseTracker {
    /// Next sequence number to be issued.
    issued: AtomicU64,
    /// Sequence numbers below this predate the latest rebuild or import.
    epoch: AtomicU64,
    /// Sequence numbers below this have left the queue.
    settled: AtomicU64,
    /// Sequence number being animated, or [`NOT_ANIMATING`].
    animating: AtomicU64,
    /// Moves dropped by a failed turn since `epoch`.
    dropped: Mutex<Vec<u64>>,
}

// Compile-time assertion: PhaseTracker must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<PhaseTracker>();
};

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTracker {
    /// A tracker with nothing issued.
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            epoch: AtomicU64::new(0),
            settled: AtomicU64::new(0),
            animating: AtomicU64::new(NOT_ANIMATING),
            dropped: Mutex::new(Vec::new()),
        }
    }

    /// Lifecycle phase of the move submitted as `seq`.
    ///
    /// `None` for sequence numbers never issued, for moves dropped because
    /// their turn failed, and for anything submitted before the latest
    /// rebuild or import.
    pub fn phase(&self, seq: u64) -> Option<MovePhase> {
        if seq < self.epoch.load(Ordering::Acquire) || seq >= self.issued.load(Ordering::Acquire) {
            return None;
        }
        if self.animating.load(Ordering::Acquire) == seq {
            return Some(MovePhase::Animating);
        }
        if seq >= self.settled.load(Ordering::Acquire) {
            return Some(MovePhase::Queued);
        }
        if self.was_dropped(seq) {
            None
        } else {
            Some(MovePhase::Committed)
        }
    }

    /// The move currently being animated, if any.
    pub fn animating(&self) -> Option<u64> {
        match self.animating.load(Ordering::Acquire) {
            NOT_ANIMATING => None,
            seq => Some(seq),
        }
    }

    fn was_dropped(&self, seq: u64) -> bool {
        self.dropped
            .lock()
            .map(|d| d.contains(&seq))
            .unwrap_or(false)
    }

    // ── Session-side updates ───────────────────────────────────

    pub(crate) fn issued(&self, seq: u64) {
        self.issued.fetch_max(seq + 1, Ordering::Release);
    }

    pub(crate) fn begin(&self, seq: u64) {
        self.animating.store(seq, Ordering::Release);
    }

    // `settled` is published before `animating` clears so a reader never
    // sees a finished move as queued.
    pub(crate) fn finish(&self, seq: u64) {
        self.settled.store(seq + 1, Ordering::Release);
        self.animating.store(NOT_ANIMATING, Ordering::Release);
    }

    pub(crate) fn drop_move(&self, seq: u64) {
        if let Ok(mut dropped) = self.dropped.lock() {
            dropped.push(seq);
        }
        self.finish(seq);
    }

    /// Forget everything below `next`, the first sequence number of the
    /// new cube.
    pub(crate) fn reset(&self, next: u64) {
        if let Ok(mut dropped) = self.dropped.lock() {
            dropped.clear();
        }
        self.settled.store(next, Ordering::Release);
        self.epoch.store(next, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unissued_sequence_numbers_have_no_phase() {
        let t = PhaseTracker::new();
        assert_eq!(t.phase(0), None);
        t.issued(0);
        assert_eq!(t.phase(0), Some(MovePhase::Queued));
        assert_eq!(t.phase(1), None);
    }

    #[test]
    fn lifecycle_runs_queued_animating_committed() {
        let t = PhaseTracker::new();
        t.issued(0);
        t.issued(1);
        t.begin(0);
        assert_eq!(t.phase(0), Some(MovePhase::Animating));
        assert_eq!(t.phase(1), Some(MovePhase::Queued));
        assert_eq!(t.animating(), Some(0));
        t.finish(0);
        assert_eq!(t.phase(0), Some(MovePhase::Committed));
        assert_eq!(t.animating(), None);
    }

    #[test]
    fn dropped_moves_are_not_committed() {
        let t = PhaseTracker::new();
        for seq in 0..3 {
            t.issued(seq);
        }
        t.finish(0);
        t.drop_move(1);
        t.finish(2);
        assert_eq!(t.phase(0), Some(MovePhase::Committed));
        assert_eq!(t.phase(1), None);
        assert_eq!(t.phase(2), Some(MovePhase::Committed));
    }

    #[test]
    fn reset_forgets_earlier_moves() {
        let t = PhaseTracker::new();
        for seq in 0..4 {
            t.issued(seq);
        }
        t.finish(0);
        t.drop_move(1);
        t.reset(4);
        assert!((0..4).all(|seq| t.phase(seq).is_none()));
        assert!(t.dropped.lock().unwrap().is_empty());
        t.issued(4);
        assert_eq!(t.phase(4), Some(MovePhase::Queued));
    }
}
