//! Bounded FIFO move queue with monotonic sequence numbers.
//!
//! [`MoveQueue`] buffers moves between submission and execution. It
//! enforces a capacity limit and stamps each accepted move with a
//! sequence number. Moves leave in exactly the order they arrived: no
//! reordering, no coalescing of adjacent moves on the same layer.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use cubik_core::{CubeError, Move};

// ── SubmitError ────────────────────────────────────────────────────

/// Why a move (or a request that enqueues moves) was not accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The move queue is at capacity.
    QueueFull {
        /// Configured capacity.
        capacity: usize,
    },
    /// The move failed validation against the current grid.
    Rejected(CubeError),
    /// The worker request channel is full (back-pressure).
    ChannelFull,
    /// The worker thread has shut down.
    Shutdown,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull { capacity } => write!(f, "move queue full ({capacity} pending)"),
            Self::Rejected(e) => write!(f, "move rejected: {e}"),
            Self::ChannelFull => write!(f, "worker request channel full"),
            Self::Shutdown => write!(f, "worker has shut down"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CubeError> for SubmitError {
    fn from(e: CubeError) -> Self {
        Self::Rejected(e)
    }
}

// ── Move lifecycle ─────────────────────────────────────────────────

/// Where a queued move came from, which decides what its commit does to
/// history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOrigin {
    /// A fresh recorded move: appended to history, clears the redo stack.
    New,
    /// A redo: appended to history, the rest of the redo stack survives.
    Redo,
    /// Unrecorded: undo inverses, solve steps, or a caller passing
    /// `record = false`. History is not touched.
    Unrecorded,
}

impl MoveOrigin {
    /// Whether committing a move of this origin appends it to history.
    pub const fn records(self) -> bool {
        !matches!(self, Self::Unrecorded)
    }
}

/// Lifecycle phase of a submitted move.
///
/// At most one move is [`Animating`](MovePhase::Animating) at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePhase {
    /// Waiting in the queue.
    Queued,
    /// Dequeued; its animation is being presented.
    Animating,
    /// Applied to the cube state.
    Committed,
}

/// A move waiting for execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueuedMove {
    /// The move itself.
    pub mv: Move,
    /// What its commit does to history.
    pub origin: MoveOrigin,
    /// Monotonic sequence number assigned at submission.
    pub seq: u64,
}

/// Acknowledgement for an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReceipt {
    /// Sequence number; use with
    /// [`CubeSession::phase`](crate::CubeSession::phase).
    pub seq: u64,
    /// Moves ahead of this one at submission time, including any
    /// currently animating.
    pub ahead: usize,
}

// ── MoveQueue ──────────────────────────────────────────────────────

/// Bounded FIFO of [`QueuedMove`]s.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move};
/// use cubik_engine::{MoveOrigin, MoveQueue};
///
/// let mut q = MoveQueue::new(2);
/// let a = q.push(Move::new(FaceLabel::Up, 2, 1), MoveOrigin::New).unwrap();
/// let b = q.push(Move::new(FaceLabel::Up, 2, 1), MoveOrigin::New).unwrap();
/// assert!(q.push(Move::new(FaceLabel::Up, 2, 1), MoveOrigin::New).is_err());
///
/// assert_eq!(q.pop().unwrap().seq, a.seq);
/// assert_eq!(q.pop().unwrap().seq, b.seq);
/// assert!(q.is_empty());
/// ```
#[derive(Debug)]
pub struct MoveQueue {
    queue: VecDeque<QueuedMove>,
    capacity: usize,
    next_seq: u64,
}

impl MoveQueue {
    /// Create a queue holding at most `capacity` moves.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. [`CubeConfig::validate`](crate::CubeConfig::validate)
    /// rejects that before a session builds its queue.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "MoveQueue capacity must be at least 1");
        Self {
            queue: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_seq: 0,
        }
    }

    /// Append a move.
    ///
    /// # Errors
    ///
    /// [`SubmitError::QueueFull`] if the queue is at capacity. Nothing is
    /// consumed from the sequence counter on rejection.
    pub fn push(&mut self, mv: Move, origin: MoveOrigin) -> Result<MoveReceipt, SubmitError> {
        if self.queue.len() >= self.capacity {
            return Err(SubmitError::QueueFull {
                capacity: self.capacity,
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let ahead = self.queue.len();
        self.queue.push_back(QueuedMove { mv, origin, seq });
        Ok(MoveReceipt { seq, ahead })
    }

    /// Remove the oldest move.
    pub fn pop(&mut self) -> Option<QueuedMove> {
        self.queue.pop_front()
    }

    /// Whether `seq` is still waiting.
    pub fn contains(&self, seq: u64) -> bool {
        self.queue.iter().any(|q| q.seq == seq)
    }

    /// Moves waiting, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &QueuedMove> + '_ {
        self.queue.iter()
    }

    /// Number of moves waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Room left before [`SubmitError::QueueFull`].
    pub fn remaining(&self) -> usize {
        self.capacity - self.queue.len()
    }

    /// Maximum number of moves this queue can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The sequence number the next accepted move will get.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Discard every waiting move, returning how many were dropped.
    ///
    /// Called on rebuild and import so moves computed against the old
    /// grid never run against the new one. Sequence numbers keep counting.
    pub fn clear(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        n
    }
}
