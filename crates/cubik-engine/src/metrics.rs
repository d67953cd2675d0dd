//! Per-move performance metrics for the cube session.
//!
//! [`MoveMetrics`] captures timing for the most recent commit plus
//! cumulative counters for the session's lifetime.

/// Timing and counters collected by a [`CubeSession`](crate::CubeSession).
///
/// Durations are in microseconds and describe the most recent commit.
/// Counters are cumulative since the session was created and survive
/// rebuilds and imports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveMetrics {
    /// Time computing the permutation and relabelling, in microseconds.
    pub turn_us: u64,
    /// Time inside [`Animator::animate`](crate::Animator::animate), in microseconds.
    pub animate_us: u64,
    /// Time swapping in the new state and rebuilding the frame, in microseconds.
    pub commit_us: u64,
    /// Facelet-bearing cubies on the rotated layer.
    pub affected_cubies: usize,
    /// Quarter turns executed by the move.
    pub quarter_steps: u32,
    /// Cumulative number of committed moves, including zero-turn ones.
    pub commits: u64,
    /// Cumulative number of submissions rejected (full queue or invalid move).
    pub rejections: u64,
    /// Cumulative number of undo requests that enqueued a move.
    pub undos: u64,
    /// Cumulative number of redo requests that enqueued a move.
    pub redos: u64,
    /// Cumulative number of queued moves dropped by rebuild or import.
    pub discarded: u64,
}

impl MoveMetrics {
    /// Copy the cumulative counters from `prev`, clearing the per-move fields.
    pub(crate) fn carry(prev: &Self) -> Self {
        Self {
            commits: prev.commits,
            rejections: prev.rejections,
            undos: prev.undos,
            redos: prev.redos,
            discarded: prev.discarded,
            ..Self::default()
        }
    }
}
