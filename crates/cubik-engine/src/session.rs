//! The user-facing cube session: one cube, one queue, one history.
//!
//! [`CubeSession`] owns everything a single cube needs. There is no shared
//! global state: build as many sessions as you like, each with its own
//! seed, and they never interact.
//!
//! # Execution model
//!
//! Submission and execution are separate. [`submit`](CubeSession::submit)
//! validates a move and appends it to the FIFO queue. [`step`](CubeSession::step)
//! is the single consumer: it dequeues one move, computes the new state,
//! hands the [`Animator`] a snapshot-based [`MoveAnimation`], commits, and
//! updates history. Only `step` mutates cube state, and it runs one move
//! to completion before looking at the next, so at most one move is ever
//! animating.
//!
//! Compound operations ([`scramble`](CubeSession::scramble),
//! [`solve`](CubeSession::solve)) first drain the queue, then submit and
//! run their moves one at a time. They are not atomic: each move commits
//! fully before the next is generated.

use std::sync::Arc;
use std::time::Instant;

use cubik_arena::CubeState;
use cubik_core::{CubeError, FaceLabel, GridSize, Move, Position, StateRecord};
use cubik_space::CubeGrid;
use cubik_turn::{apply_turn, TurnOutcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bridge::{Animator, CubeFrame, FaceletPose, MoveAnimation, NullAnimator};
use crate::config::{ConfigError, CubeConfig};
use crate::history::MoveHistory;
use crate::metrics::MoveMetrics;
use crate::phase::PhaseTracker;
use crate::queue::{MoveOrigin, MovePhase, MoveQueue, MoveReceipt, QueuedMove, SubmitError};

const LOG_TARGET: &str = "cubik::session";

/// Probability that a scramble move turns in the positive direction.
const SCRAMBLE_POSITIVE_BIAS: f64 = 0.75;

// Compile-time assertion: CubeSession can move onto a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<CubeSession>();
    }
};

// ── MoveReport ─────────────────────────────────────────────────────

/// What [`CubeSession::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Sequence number from submission.
    pub seq: u64,
    /// The committed move.
    pub mv: Move,
    /// How the commit affected history.
    pub origin: MoveOrigin,
    /// Timing for this move plus cumulative counters.
    pub metrics: MoveMetrics,
}

// ── CubeSession ────────────────────────────────────────────────────

/// A single interactive cube.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move};
/// use cubik_engine::{CubeConfig, CubeSession};
///
/// let mut cube = CubeSession::new(CubeConfig::default()).unwrap();
/// cube.submit(Move::new(FaceLabel::Up, 2, 1), true).unwrap();
/// cube.run_until_idle().unwrap();
/// assert!(!cube.state().is_solved());
///
/// cube.undo().unwrap();
/// cube.run_until_idle().unwrap();
/// assert!(cube.state().is_solved());
/// assert_eq!(cube.history().redo_len(), 1);
/// ```
pub struct CubeSession {
    config: CubeConfig,
    state: CubeState,
    history: MoveHistory,
    queue: MoveQueue,
    animator: Box<dyn Animator>,
    rng: ChaCha8Rng,
    frame: CubeFrame,
    phases: Arc<PhaseTracker>,
    metrics: MoveMetrics,
}

impl CubeSession {
    /// Build a solved session that animates nothing.
    pub fn new(config: CubeConfig) -> Result<Self, ConfigError> {
        Self::with_animator(config, Box::new(NullAnimator))
    }

    /// Build a solved session presenting moves through `animator`.
    pub fn with_animator(
        config: CubeConfig,
        animator: Box<dyn Animator>,
    ) -> Result<Self, ConfigError> {
        let size = config.validate()?;
        let state = CubeState::solved(CubeGrid::from_size(size));
        let frame = CubeFrame::capture(&state, state.generation(), config.animation.cubie_size);
        log::info!(
            target: LOG_TARGET,
            "session built: size={size} seed={} max_queue={}",
            config.seed,
            config.max_queue
        );
        Ok(Self {
            queue: MoveQueue::new(config.max_queue),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            state,
            history: MoveHistory::new(),
            animator,
            frame,
            phases: Arc::new(PhaseTracker::new()),
            metrics: MoveMetrics::default(),
        })
    }

    /// Replace the animator. Takes effect from the next move.
    pub fn set_animator(&mut self, animator: Box<dyn Animator>) {
        self.animator = animator;
    }

    /// Restart the scramble generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The current configuration (size reflects the latest rebuild/import).
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Current grid size.
    pub fn size(&self) -> GridSize {
        self.state.size()
    }

    /// Committed cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Undo and redo stacks.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The frame rebuilt after the latest commit.
    pub fn frame(&self) -> &CubeFrame {
        &self.frame
    }

    /// Metrics from the latest commit plus cumulative counters.
    pub fn metrics(&self) -> &MoveMetrics {
        &self.metrics
    }

    /// Moves waiting to run.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no move is waiting.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Lifecycle phase of the move submitted as `seq`. See
    /// [`PhaseTracker::phase`].
    pub fn phase(&self, seq: u64) -> Option<MovePhase> {
        self.phases.phase(seq)
    }

    /// A shared handle on move phases, readable from other threads while
    /// this session is busy animating.
    pub fn phases(&self) -> Arc<PhaseTracker> {
        Arc::clone(&self.phases)
    }

    // ── Submission ─────────────────────────────────────────────

    /// Queue `mv`. On commit, `record = true` appends it to history and
    /// clears the redo stack; `record = false` leaves history alone.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Rejected`] if the layer is outside the grid.
    /// - [`SubmitError::QueueFull`] if the queue is at capacity.
    pub fn submit(&mut self, mv: Move, record: bool) -> Result<MoveReceipt, SubmitError> {
        let origin = if record {
            MoveOrigin::New
        } else {
            MoveOrigin::Unrecorded
        };
        self.enqueue(mv, origin)
    }

    /// Queue a recorded move derived from a picked facelet: the axis comes
    /// from `label`, the layer from `position`.
    ///
    /// # Errors
    ///
    /// As [`submit`](CubeSession::submit), plus [`SubmitError::Rejected`]
    /// when `position` is outside the grid.
    pub fn submit_pick(
        &mut self,
        position: Position,
        label: FaceLabel,
        turns: i32,
    ) -> Result<MoveReceipt, SubmitError> {
        let mv = Move::from_pick(position, label, turns, self.size()).inspect_err(|e| {
            self.metrics.rejections += 1;
            log::warn!(target: LOG_TARGET, "pick rejected: {e}");
        })?;
        self.submit(mv, true)
    }

    fn enqueue(&mut self, mv: Move, origin: MoveOrigin) -> Result<MoveReceipt, SubmitError> {
        let result = mv
            .check(self.size())
            .map_err(SubmitError::from)
            .and_then(|mv| self.queue.push(mv, origin));
        match &result {
            Ok(receipt) => {
                self.phases.issued(receipt.seq);
                log::debug!(
                    target: LOG_TARGET,
                    "queued #{} {mv} ({origin:?}), {} ahead",
                    receipt.seq,
                    receipt.ahead
                );
            }
            Err(e) => {
                self.metrics.rejections += 1;
                log::warn!(target: LOG_TARGET, "rejected {mv}: {e}");
            }
        }
        result
    }

    // ── Execution ──────────────────────────────────────────────

    /// Run the oldest queued move to completion. `Ok(None)` when idle.
    ///
    /// # Errors
    ///
    /// A [`CubeError`] if the move no longer fits the grid. Moves are
    /// validated on submission and the queue is cleared on every resize,
    /// so this indicates a bug; the move is dropped and state is unchanged.
    pub fn step(&mut self) -> Result<Option<MoveReport>, CubeError> {
        let Some(queued) = self.queue.pop() else {
            return Ok(None);
        };
        let mut metrics = MoveMetrics::carry(&self.metrics);

        let start = Instant::now();
        let outcome = match apply_turn(&self.state, queued.mv) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.drop_move(queued, &e);
                return Err(e);
            }
        };
        metrics.turn_us = start.elapsed().as_micros() as u64;
        metrics.affected_cubies = outcome.affected_cubies();
        metrics.quarter_steps = outcome.plan().steps();

        if !outcome.plan().is_noop() {
            self.phases.begin(queued.seq);
            let animation = self.animation_for(queued.seq, &outcome);
            let animate_start = Instant::now();
            self.animator.animate(&animation);
            metrics.animate_us = animate_start.elapsed().as_micros() as u64;

            let commit_start = Instant::now();
            if let Err(e) = outcome.commit(&mut self.state) {
                self.drop_move(queued, &e);
                return Err(e);
            }
            self.frame = CubeFrame::capture(
                &self.state,
                self.state.generation(),
                self.config.animation.cubie_size,
            );
            metrics.commit_us = commit_start.elapsed().as_micros() as u64;
        }

        self.history.record(queued.mv, queued.origin);
        self.phases.finish(queued.seq);
        metrics.commits += 1;
        self.animator.committed(&self.frame);
        log::debug!(
            target: LOG_TARGET,
            "committed #{} {} ({:?}), history={} redo={}",
            queued.seq,
            queued.mv,
            queued.origin,
            self.history.len(),
            self.history.redo_len()
        );

        self.metrics = metrics.clone();
        Ok(Some(MoveReport {
            seq: queued.seq,
            mv: queued.mv,
            origin: queued.origin,
            metrics,
        }))
    }

    fn drop_move(&mut self, queued: QueuedMove, e: &CubeError) {
        self.metrics.rejections += 1;
        self.phases.drop_move(queued.seq);
        log::error!(target: LOG_TARGET, "dropping #{} {}: {e}", queued.seq, queued.mv);
    }

    /// Run queued moves until the queue is empty. Returns how many ran.
    pub fn run_until_idle(&mut self) -> Result<usize, CubeError> {
        let mut ran = 0;
        while self.step()?.is_some() {
            ran += 1;
        }
        Ok(ran)
    }

    fn animation_for(&self, seq: u64, outcome: &TurnOutcome) -> MoveAnimation {
        let grid = self.state.grid();
        let cubie_size = self.config.animation.cubie_size;
        let plan = outcome.plan();
        MoveAnimation {
            seq,
            mv: outcome.mv(),
            axis: plan.step().axis(),
            quarters: plan.signed_quarters(),
            duration: self.config.animation.duration_for(plan.steps()),
            easing: self.config.animation.easing,
            start: outcome
                .affected()
                .iter()
                .map(|&(cell, label, facelet)| FaceletPose {
                    id: facelet.id,
                    cell,
                    label,
                    world: grid.facelet_pose(cell, label, cubie_size),
                })
                .collect(),
        }
    }

    // ── History operations ─────────────────────────────────────

    /// Undo the most recent recorded move by queueing its inverse.
    ///
    /// Pending moves run first, so the move undone is the latest one
    /// submitted. It goes onto the redo stack immediately. `Ok(None)`
    /// when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Propagates execution failures of pending moves, or
    /// [`SubmitError::QueueFull`] with history left as it was.
    pub fn undo(&mut self) -> Result<Option<MoveReceipt>, SubmitError> {
        self.run_until_idle()?;
        let Some(mv) = self.history.take_undo() else {
            return Ok(None);
        };
        match self.enqueue(mv.inverse(), MoveOrigin::Unrecorded) {
            Ok(receipt) => {
                self.metrics.undos += 1;
                log::info!(target: LOG_TARGET, "undo {mv}");
                Ok(Some(receipt))
            }
            Err(e) => {
                self.history.restore_undo();
                Err(e)
            }
        }
    }

    /// Redo the most recently undone move. Pending moves run first. The
    /// move returns to history when it commits; the rest of the redo stack
    /// is kept. `Ok(None)` when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Propagates execution failures of pending moves, or
    /// [`SubmitError::QueueFull`] with the redo stack left as it was.
    pub fn redo(&mut self) -> Result<Option<MoveReceipt>, SubmitError> {
        self.run_until_idle()?;
        let Some(mv) = self.history.take_redo() else {
            return Ok(None);
        };
        match self.enqueue(mv, MoveOrigin::Redo) {
            Ok(receipt) => {
                self.metrics.redos += 1;
                log::info!(target: LOG_TARGET, "redo {mv}");
                Ok(Some(receipt))
            }
            Err(e) => {
                self.history.restore_redo(mv);
                Err(e)
            }
        }
    }

    /// Apply `count` random recorded moves, one at a time, and return them.
    ///
    /// Each move picks a face uniformly among the five that differ from the
    /// previous move's face (the first compares against the last recorded
    /// move), a uniform layer, and a quarter turn that is positive three
    /// times as often as negative. Pending moves run first.
    ///
    /// # Errors
    ///
    /// Propagates submission or execution failures. Moves committed before
    /// the failure stay committed and recorded.
    pub fn scramble(&mut self, count: usize) -> Result<Vec<Move>, SubmitError> {
        self.run_until_idle()?;
        log::info!(target: LOG_TARGET, "scramble: {count} moves");
        let n = self.size().get();
        let mut previous = self.history.last().map(Move::face);
        let mut generated = Vec::with_capacity(count);
        for _ in 0..count {
            let face = self.random_face(previous);
            let layer = self.rng.random_range(0..n);
            let turns = if self.rng.random_bool(SCRAMBLE_POSITIVE_BIAS) {
                1
            } else {
                -1
            };
            let mv = Move::new(face, layer, turns);
            self.enqueue(mv, MoveOrigin::New)?;
            self.run_until_idle()?;
            generated.push(mv);
            previous = Some(face);
        }
        Ok(generated)
    }

    fn random_face(&mut self, previous: Option<FaceLabel>) -> FaceLabel {
        match previous {
            None => FaceLabel::ALL[self.rng.random_range(0..6)],
            Some(prev) => {
                let i = self.rng.random_range(0..5);
                let i = if i >= prev.index() { i + 1 } else { i };
                FaceLabel::ALL[i]
            }
        }
    }

    /// Replay the exact inverse of the recorded history, newest first,
    /// then clear both stacks. Returns the number of moves replayed.
    ///
    /// This restores the state the history started from; it is not a
    /// search. Pending moves run first so they are part of the history
    /// being undone. No-op when history is empty.
    ///
    /// # Errors
    ///
    /// Propagates submission or execution failures. Moves replayed before
    /// the failure stay applied and history is not cleared.
    pub fn solve(&mut self) -> Result<usize, SubmitError> {
        self.run_until_idle()?;
        if self.history.is_empty() {
            return Ok(0);
        }
        let inverse = self.history.inverse_sequence();
        log::info!(target: LOG_TARGET, "solve: replaying {} inverse moves", inverse.len());
        for &mv in &inverse {
            self.enqueue(mv, MoveOrigin::Unrecorded)?;
            self.run_until_idle()?;
        }
        self.history.clear();
        Ok(inverse.len())
    }

    // ── Rebuild, export, import ────────────────────────────────

    /// Discard everything and start over with a solved cube of size `n`.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidSize`]; the session is left untouched.
    pub fn rebuild(&mut self, n: u32) -> Result<(), CubeError> {
        let state = CubeState::build(n)?;
        self.install(state, MoveHistory::new());
        log::info!(target: LOG_TARGET, "rebuilt at size {n}");
        Ok(())
    }

    /// Snapshot the committed state and recorded history.
    pub fn export(&self) -> StateRecord {
        self.state.to_record(self.history.moves())
    }

    /// Replace state and history from `record`.
    ///
    /// The record is validated completely against a fresh grid of its own
    /// size before anything is touched. Queued moves are discarded and the
    /// redo stack starts empty.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidSize`] or [`CubeError::MalformedState`]; the
    /// session is left untouched.
    pub fn import(&mut self, record: &StateRecord) -> Result<(), CubeError> {
        let state = CubeState::from_record(record).inspect_err(|e| {
            log::warn!(target: LOG_TARGET, "import rejected: {e}");
        })?;
        self.install(state, MoveHistory::from_moves(record.history.clone()));
        log::info!(
            target: LOG_TARGET,
            "imported size {} with {} recorded moves",
            record.size,
            record.history.len()
        );
        Ok(())
    }

    fn install(&mut self, state: CubeState, history: MoveHistory) {
        self.discard_queue();
        self.phases.reset(self.queue.next_seq());
        self.config.size = state.size().get();
        self.frame = CubeFrame::capture(
            &state,
            state.generation(),
            self.config.animation.cubie_size,
        );
        self.state = state;
        self.history = history;
        self.animator.committed(&self.frame);
    }

    fn discard_queue(&mut self) {
        let dropped = self.queue.clear();
        if dropped == 0 {
            return;
        }
        self.metrics.discarded += dropped as u64;
        log::warn!(target: LOG_TARGET, "discarded {dropped} queued moves");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Log {
        animated: Vec<(u64, usize)>,
        frames: usize,
    }

    struct Spy(Arc<Mutex<Log>>);

    impl Animator for Spy {
        fn animate(&mut self, animation: &MoveAnimation) {
            self.0
                .lock()
                .unwrap()
                .animated
                .push((animation.seq, animation.start.len()));
        }

        fn committed(&mut self, _frame: &CubeFrame) {
            self.0.lock().unwrap().frames += 1;
        }
    }

    fn session(n: u32) -> CubeSession {
        CubeSession::new(CubeConfig {
            size: n,
            ..CubeConfig::default()
        })
        .unwrap()
    }

    fn up(n: u32, turns: i32) -> Move {
        Move::new(FaceLabel::Up, n - 1, turns)
    }

    #[test]
    fn rejects_invalid_config() {
        let err = CubeSession::new(CubeConfig {
            size: 0,
            ..CubeConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, ConfigError::InvalidSize { size: 0, .. }));
    }

    #[test]
    fn submit_validates_layer_synchronously() {
        let mut s = session(3);
        let err = s.submit(Move::new(FaceLabel::Up, 3, 1), true).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected(CubeError::LayerOutOfBounds { layer: 3, size: 3 })
        ));
        assert!(s.is_idle());
        assert_eq!(s.metrics().rejections, 1);
    }

    #[test]
    fn queue_capacity_is_enforced() {
        let mut s = CubeSession::new(CubeConfig {
            max_queue: 2,
            ..CubeConfig::default()
        })
        .unwrap();
        s.submit(up(3, 1), true).unwrap();
        s.submit(up(3, 1), true).unwrap();
        assert_eq!(
            s.submit(up(3, 1), true),
            Err(SubmitError::QueueFull { capacity: 2 })
        );
    }

    #[test]
    fn moves_run_in_submission_order() {
        let mut s = session(3);
        let a = s.submit(up(3, 1), true).unwrap();
        let b = s.submit(Move::new(FaceLabel::Right, 2, 1), true).unwrap();
        assert_eq!(s.phase(a.seq), Some(MovePhase::Queued));
        let first = s.step().unwrap().unwrap();
        assert_eq!(first.seq, a.seq);
        assert_eq!(s.phase(a.seq), Some(MovePhase::Committed));
        assert_eq!(s.phase(b.seq), Some(MovePhase::Queued));
        assert_eq!(s.step().unwrap().unwrap().seq, b.seq);
        assert!(s.step().unwrap().is_none());
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn unrecorded_moves_skip_history() {
        let mut s = session(3);
        s.submit(up(3, 1), false).unwrap();
        s.run_until_idle().unwrap();
        assert!(s.history().is_empty());
        assert!(!s.state().is_solved());
    }

    #[test]
    fn zero_turn_move_mutates_nothing() {
        let log = Arc::new(Mutex::new(Log::default()));
        let mut s = session(3);
        s.set_animator(Box::new(Spy(Arc::clone(&log))));
        s.submit(up(3, 0), true).unwrap();
        let report = s.step().unwrap().unwrap();
        assert_eq!(report.metrics.quarter_steps, 0);
        assert_eq!(s.state().generation(), 0);
        assert!(log.lock().unwrap().animated.is_empty());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn animator_sees_affected_facelets_before_commit() {
        let log = Arc::new(Mutex::new(Log::default()));
        let mut s = session(3);
        s.set_animator(Box::new(Spy(Arc::clone(&log))));
        let r = s.submit(up(3, 1), true).unwrap();
        s.run_until_idle().unwrap();
        let log = log.lock().unwrap();
        assert_eq!(log.animated, vec![(r.seq, 21)]);
        assert_eq!(log.frames, 1);
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut s = session(3);
        s.submit(up(3, 1), true).unwrap();
        s.submit(Move::new(FaceLabel::Front, 1, -1), true).unwrap();
        s.run_until_idle().unwrap();
        let before = s.state().cells().to_vec();

        s.undo().unwrap().unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().redo_len(), 1);

        s.redo().unwrap().unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.state().cells(), &before[..]);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.metrics().undos, 1);
        assert_eq!(s.metrics().redos, 1);
    }

    #[test]
    fn redo_keeps_remaining_entries() {
        let mut s = session(2);
        for _ in 0..3 {
            s.submit(up(2, 1), true).unwrap();
        }
        s.run_until_idle().unwrap();
        for _ in 0..3 {
            s.undo().unwrap();
        }
        s.run_until_idle().unwrap();
        assert_eq!(s.history().redo_len(), 3);
        s.redo().unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.history().redo_len(), 2);

        s.submit(up(2, -1), true).unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.history().redo_len(), 0);
    }

    #[test]
    fn undo_and_redo_on_empty_are_noops() {
        let mut s = session(3);
        assert_eq!(s.undo(), Ok(None));
        assert_eq!(s.redo(), Ok(None));
        assert!(s.is_idle());
    }

    #[test]
    fn undo_runs_pending_moves_first() {
        let mut s = session(3);
        let a = up(3, 1);
        let b = Move::new(FaceLabel::Right, 2, 1);
        s.submit(a, true).unwrap();
        s.run_until_idle().unwrap();
        s.submit(b, true).unwrap();

        s.undo().unwrap().unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.history().moves(), &[a][..]);
        assert_eq!(s.history().redo_moves(), &[b][..]);

        s.solve().unwrap();
        assert!(s.state().is_solved());
    }

    #[test]
    fn redo_runs_pending_undo_first() {
        let mut s = session(3);
        let a = up(3, 1);
        let b = Move::new(FaceLabel::Front, 0, -1);
        s.submit(a, true).unwrap();
        s.submit(b, true).unwrap();
        s.run_until_idle().unwrap();

        s.undo().unwrap();
        s.redo().unwrap().unwrap();
        s.undo().unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.history().moves(), &[a][..]);
        assert_eq!(s.history().redo_len(), 1);

        s.solve().unwrap();
        assert!(s.state().is_solved());
    }

    struct PhaseWatcher {
        phases: Arc<PhaseTracker>,
        seen: Arc<Mutex<Vec<Option<MovePhase>>>>,
    }

    impl Animator for PhaseWatcher {
        fn animate(&mut self, animation: &MoveAnimation) {
            let phase = self.phases.phase(animation.seq);
            self.seen.lock().unwrap().push(phase);
        }
    }

    #[test]
    fn animator_observes_animating_phase() {
        let mut s = session(3);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let phases = s.phases();
        s.set_animator(Box::new(PhaseWatcher {
            phases,
            seen: Arc::clone(&seen),
        }));
        let a = s.submit(up(3, 1), true).unwrap();
        let b = s.submit(up(3, 2), true).unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some(MovePhase::Animating), Some(MovePhase::Animating)]
        );
        assert_eq!(s.phase(a.seq), Some(MovePhase::Committed));
        assert_eq!(s.phase(b.seq), Some(MovePhase::Committed));
        assert_eq!(s.phases().animating(), None);
    }

    #[test]
    fn stale_move_is_dropped_not_committed() {
        let mut s = session(5);
        let stale = s.submit(Move::new(FaceLabel::Left, 4, 1), true).unwrap();
        let next = s.submit(Move::new(FaceLabel::Left, 0, 1), true).unwrap();
        // Swap the grid underneath the queue, as a resize without a
        // queue clear would.
        s.state = CubeState::build(3).unwrap();

        assert!(matches!(
            s.step(),
            Err(CubeError::LayerOutOfBounds { layer: 4, size: 3 })
        ));
        assert_eq!(s.phase(stale.seq), None);
        assert_eq!(s.phase(next.seq), Some(MovePhase::Queued));
        assert_eq!(s.metrics().rejections, 1);

        s.step().unwrap().unwrap();
        assert_eq!(s.phase(stale.seq), None);
        assert_eq!(s.phase(next.seq), Some(MovePhase::Committed));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn scramble_extends_history_by_count() {
        let mut s = session(4);
        s.submit(up(4, 1), true).unwrap();
        let moves = s.scramble(25).unwrap();
        assert_eq!(moves.len(), 25);
        assert_eq!(s.history().len(), 26);
        assert!(s.is_idle());
        for pair in s.history().moves().windows(2) {
            assert_ne!(pair[0].face(), pair[1].face());
        }
        assert!(moves.iter().all(|m| m.quarter_steps() == 1 && m.layer() < 4));
    }

    #[test]
    fn scramble_is_seeded() {
        let mut a = session(5);
        let mut b = session(5);
        assert_eq!(a.scramble(30).unwrap(), b.scramble(30).unwrap());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn scramble_favours_positive_turns() {
        let mut s = session(3);
        let moves = s.scramble(400).unwrap();
        let positive = moves.iter().filter(|m| m.turns() > 0).count();
        assert!((240..=360).contains(&positive), "positive = {positive}");
    }

    #[test]
    fn solve_restores_and_clears() {
        let mut s = session(4);
        s.scramble(40).unwrap();
        s.undo().unwrap();
        s.run_until_idle().unwrap();
        assert_eq!(s.solve(), Ok(39));
        assert!(s.state().is_solved());
        assert!(s.history().is_empty());
        assert_eq!(s.history().redo_len(), 0);
        assert_eq!(s.solve(), Ok(0));
    }

    #[test]
    fn rebuild_resets_everything() {
        let mut s = session(3);
        s.scramble(5).unwrap();
        let pending = s.submit(up(3, 1), true).unwrap();
        s.rebuild(5).unwrap();
        assert_eq!(s.size().get(), 5);
        assert!(s.state().is_solved());
        assert!(s.history().is_empty());
        assert!(s.is_idle());
        assert_eq!(s.phase(pending.seq), None);
        assert_eq!(s.phase(0), None);
        assert_eq!(s.metrics().discarded, 1);
        let fresh = s.submit(up(5, 1), true).unwrap();
        assert_eq!(fresh.seq, pending.seq + 1);
        assert_eq!(s.phase(fresh.seq), Some(MovePhase::Queued));
        assert_eq!(s.frame().len(), 150);
        assert!(s.rebuild(0).is_err());
        assert_eq!(s.size().get(), 5);
    }

    #[test]
    fn export_import_round_trip() {
        let mut a = session(3);
        a.scramble(12).unwrap();
        let record = a.export();

        let mut b = session(2);
        b.import(&record).unwrap();
        assert_eq!(b.size().get(), 3);
        assert_eq!(b.state().cells(), a.state().cells());
        assert_eq!(b.history().moves(), a.history().moves());
        b.solve().unwrap();
        assert!(b.state().is_solved());
    }

    #[test]
    fn failed_import_leaves_session_untouched() {
        let mut s = session(3);
        s.scramble(3).unwrap();
        let before = s.state().clone();
        let mut record = s.export();
        record.cubies.pop();
        assert!(s.import(&record).is_err());
        assert_eq!(s.state(), &before);
        assert_eq!(s.history().len(), 3);
    }

    #[test]
    fn pick_derives_layer_from_label_axis() {
        let mut s = session(3);
        s.submit_pick(Position::new(0, 1, 2), FaceLabel::Front, 1)
            .unwrap();
        let report = s.step().unwrap().unwrap();
        assert_eq!(report.mv, Move::new(FaceLabel::Front, 2, 1));
        assert!(s
            .submit_pick(Position::new(0, 3, 0), FaceLabel::Up, 1)
            .is_err());
    }
}
