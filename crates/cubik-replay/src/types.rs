//! Data types for move logs.

use cubik_core::Move;
use cubik_engine::MoveOrigin;

/// Session parameters stored at the start of every move log.
///
/// Everything needed to rebuild the session the log was recorded from:
/// grid size, scramble seed, and a hash of the starting state so a replay
/// can refuse to run against the wrong cube.
///
/// # Examples
///
/// ```
/// use cubik_replay::LogHeader;
///
/// let header = LogHeader {
///     size: 3,
///     seed: 42,
///     initial_hash: 0,
///     cubik_version: "0.1.0".into(),
/// };
/// assert_eq!(header.size, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogHeader {
    /// Grid size `N`.
    pub size: u32,
    /// Scramble RNG seed.
    pub seed: u64,
    /// [`state_hash`](crate::state_hash) of the state before the first move.
    pub initial_hash: u64,
    /// Version of the crate that wrote the log.
    pub cubik_version: String,
}

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogFrame {
    /// Sequence number the session assigned at submission.
    pub seq: u64,
    /// History effect of the commit.
    pub origin: MoveOrigin,
    /// The move.
    pub mv: Move,
    /// [`state_hash`](crate::state_hash) after the commit.
    pub state_hash: u64,
}

// ── Tag constants ───────────────────────────────────────────────

/// Origin tag for [`MoveOrigin::New`].
pub const ORIGIN_NEW: u8 = 0;
/// Origin tag for [`MoveOrigin::Redo`].
pub const ORIGIN_REDO: u8 = 1;
/// Origin tag for [`MoveOrigin::Unrecorded`].
pub const ORIGIN_UNRECORDED: u8 = 2;
