//! Reusable animator and session fixtures.
//!
//! - [`RecordingAnimator`] logs every callback into a shared buffer.
//! - [`SleepingAnimator`] blocks for a fixed time per move, like a renderer.
//! - [`PanickingAnimator`] panics after N animations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cubik_core::Move;
use cubik_engine::{Animator, CubeConfig, CubeFrame, CubeSession, MoveAnimation};

/// One callback observed by a [`RecordingAnimator`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationEvent {
    /// `animate` was called.
    Animate {
        seq: u64,
        mv: Move,
        quarters: i32,
        facelets: usize,
    },
    /// `committed` was called.
    Committed { generation: u64, facelets: usize },
}

/// Logs every callback. Clone the handle before boxing it to keep a way
/// of reading the log.
#[derive(Clone, Default)]
pub struct RecordingAnimator {
    events: Arc<Mutex<Vec<AnimationEvent>>>,
    // Set by `animate`, cleared by `committed`; counts overlaps.
    in_flight: Arc<AtomicUsize>,
    overlaps: Arc<AtomicUsize>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything observed so far.
    pub fn events(&self) -> Vec<AnimationEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Sequence numbers passed to `animate`, in call order.
    pub fn animated(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AnimationEvent::Animate { seq, .. } => Some(seq),
                AnimationEvent::Committed { .. } => None,
            })
            .collect()
    }

    /// Number of `committed` callbacks.
    pub fn commits(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, AnimationEvent::Committed { .. }))
            .count()
    }

    /// How many times `animate` was entered while a previous animation had
    /// not yet been followed by its commit.
    pub fn overlaps(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }

    fn push(&self, event: AnimationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Animator for RecordingAnimator {
    fn animate(&mut self, animation: &MoveAnimation) {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) > 0 {
            self.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        self.push(AnimationEvent::Animate {
            seq: animation.seq,
            mv: animation.mv,
            quarters: animation.quarters,
            facelets: animation.start.len(),
        });
    }

    fn committed(&mut self, frame: &CubeFrame) {
        let _ = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        self.push(AnimationEvent::Committed {
            generation: frame.generation(),
            facelets: frame.len(),
        });
    }
}

/// Sleeps for a fixed time on every `animate` call.
pub struct SleepingAnimator {
    pub delay: Duration,
    pub inner: RecordingAnimator,
}

impl SleepingAnimator {
    pub fn new(delay: Duration, inner: RecordingAnimator) -> Self {
        Self { delay, inner }
    }
}

impl Animator for SleepingAnimator {
    fn animate(&mut self, animation: &MoveAnimation) {
        self.inner.animate(animation);
        thread::sleep(self.delay);
    }

    fn committed(&mut self, frame: &CubeFrame) {
        self.inner.committed(frame);
    }
}

/// Panics deterministically after `succeed_count` animations.
///
/// Useful for testing that a worker reports a lost session.
pub struct PanickingAnimator {
    pub succeed_count: usize,
    calls: Arc<AtomicUsize>,
}

impl PanickingAnimator {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `animate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Animator for PanickingAnimator {
    fn animate(&mut self, _animation: &MoveAnimation) {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            panic!(
                "deliberate animator panic after {} animations",
                self.succeed_count
            );
        }
    }
}

/// Default config at size `n` with `seed`.
pub fn config(n: u32, seed: u64) -> CubeConfig {
    CubeConfig {
        size: n,
        seed,
        ..CubeConfig::default()
    }
}

/// A session of size `n` that has already committed `count` recorded
/// scramble moves.
pub fn scrambled_session(n: u32, count: usize, seed: u64) -> CubeSession {
    let mut session = match CubeSession::new(config(n, seed)) {
        Ok(s) => s,
        Err(e) => panic!("fixture config rejected: {e}"),
    };
    if let Err(e) = session.scramble(count) {
        panic!("fixture scramble failed: {e}");
    }
    session
}
