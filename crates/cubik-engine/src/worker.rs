//! A session running on its own thread, driven over channels.
//!
//! [`CubeWorker`] moves a [`CubeSession`] onto a dedicated thread. Callers
//! send requests through a bounded channel and block on a one-shot reply.
//! While moves are queued the thread keeps stepping, checking for new
//! requests between moves, so submissions made during an animation land in
//! the queue and run afterwards in order.
//!
//! Dropping the last handle (or calling [`shutdown`](CubeWorker::shutdown))
//! closes the channel. The thread finishes whatever is still queued and
//! hands the session back.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use cubik_core::{CubeError, Move, StateRecord};

use crate::bridge::{Animator, CubeFrame};
use crate::config::{ConfigError, CubeConfig};
use crate::phase::PhaseTracker;
use crate::queue::{MovePhase, MoveReceipt, SubmitError};
use crate::session::CubeSession;

const LOG_TARGET: &str = "cubik::worker";

/// Bound on pending requests before callers see [`SubmitError::ChannelFull`].
const REQUEST_CHANNEL_CAPACITY: usize = 64;

type Reply<T> = Sender<T>;

enum Request {
    Submit {
        mv: Move,
        record: bool,
        reply: Reply<Result<MoveReceipt, SubmitError>>,
    },
    Undo {
        reply: Reply<Result<Option<MoveReceipt>, SubmitError>>,
    },
    Redo {
        reply: Reply<Result<Option<MoveReceipt>, SubmitError>>,
    },
    Scramble {
        count: usize,
        reply: Reply<Result<Vec<Move>, SubmitError>>,
    },
    Solve {
        reply: Reply<Result<usize, SubmitError>>,
    },
    Rebuild {
        size: u32,
        reply: Reply<Result<(), CubeError>>,
    },
    Import {
        record: Box<StateRecord>,
        reply: Reply<Result<(), CubeError>>,
    },
    Export {
        reply: Reply<StateRecord>,
    },
    Frame {
        reply: Reply<CubeFrame>,
    },
    WaitIdle {
        reply: Reply<Result<usize, CubeError>>,
    },
}

// ── Worker thread ──────────────────────────────────────────────────

struct WorkerLoop {
    session: CubeSession,
    requests: Receiver<Request>,
}

impl WorkerLoop {
    fn run(mut self) -> CubeSession {
        loop {
            let request = if self.session.is_idle() {
                match self.requests.recv() {
                    Ok(r) => Some(r),
                    Err(_) => break,
                }
            } else {
                match self.requests.try_recv() {
                    Ok(r) => Some(r),
                    Err(TryRecvError::Empty) => None,
                    Err(TryRecvError::Disconnected) => break,
                }
            };
            match request {
                Some(r) => self.handle(r),
                None => self.step(),
            }
        }
        log::debug!(target: LOG_TARGET, "channel closed, draining {} moves", self.session.queue_len());
        if let Err(e) = self.session.run_until_idle() {
            log::error!(target: LOG_TARGET, "drain failed: {e}");
        }
        self.session
    }

    fn step(&mut self) {
        if let Err(e) = self.session.step() {
            log::error!(target: LOG_TARGET, "step failed: {e}");
        }
    }

    // A dropped reply receiver just means the caller stopped waiting.
    fn handle(&mut self, request: Request) {
        let s = &mut self.session;
        match request {
            Request::Submit { mv, record, reply } => {
                let _ = reply.send(s.submit(mv, record));
            }
            Request::Undo { reply } => {
                let _ = reply.send(s.undo());
            }
            Request::Redo { reply } => {
                let _ = reply.send(s.redo());
            }
            Request::Scramble { count, reply } => {
                let _ = reply.send(s.scramble(count));
            }
            Request::Solve { reply } => {
                let _ = reply.send(s.solve());
            }
            Request::Rebuild { size, reply } => {
                let _ = reply.send(s.rebuild(size));
            }
            Request::Import { record, reply } => {
                let _ = reply.send(s.import(&record));
            }
            Request::Export { reply } => {
                let _ = reply.send(s.export());
            }
            Request::Frame { reply } => {
                let _ = reply.send(s.frame().clone());
            }
            Request::WaitIdle { reply } => {
                let _ = reply.send(s.run_until_idle());
            }
        }
    }
}

// ── CubeWorker ─────────────────────────────────────────────────────

/// Handle to a [`CubeSession`] running on a background thread.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move};
/// use cubik_engine::{CubeConfig, CubeWorker};
///
/// let worker = CubeWorker::start(CubeConfig::default()).unwrap();
/// worker.submit(Move::new(FaceLabel::Right, 2, 1), true).unwrap();
/// worker.wait_idle().unwrap();
/// assert_eq!(worker.export().unwrap().history.len(), 1);
///
/// let session = worker.shutdown().unwrap();
/// assert!(!session.state().is_solved());
/// ```
pub struct CubeWorker {
    requests: Option<Sender<Request>>,
    thread: Option<JoinHandle<CubeSession>>,
    phases: Arc<PhaseTracker>,
}

impl CubeWorker {
    /// Build a session from `config` with no animator and start it.
    pub fn start(config: CubeConfig) -> Result<Self, ConfigError> {
        Self::spawn(CubeSession::new(config)?)
    }

    /// Build a session presenting through `animator` and start it.
    pub fn start_with_animator(
        config: CubeConfig,
        animator: Box<dyn Animator>,
    ) -> Result<Self, ConfigError> {
        Self::spawn(CubeSession::with_animator(config, animator)?)
    }

    /// Move an existing session onto a new thread.
    pub fn spawn(session: CubeSession) -> Result<Self, ConfigError> {
        let (tx, rx) = bounded(REQUEST_CHANNEL_CAPACITY);
        let phases = session.phases();
        let worker = WorkerLoop {
            session,
            requests: rx,
        };
        let thread = thread::Builder::new()
            .name("cubik-session".into())
            .spawn(move || worker.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("session thread: {e}"),
            })?;
        log::debug!(target: LOG_TARGET, "worker started");
        Ok(Self {
            requests: Some(tx),
            thread: Some(thread),
            phases,
        })
    }

    fn call<T>(&self, make: impl FnOnce(Reply<T>) -> Request) -> Result<T, SubmitError> {
        let requests = self.requests.as_ref().ok_or(SubmitError::Shutdown)?;
        let (reply_tx, reply_rx) = bounded(1);
        requests.try_send(make(reply_tx)).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })?;
        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }

    /// Lifecycle phase of the move submitted as `seq`.
    ///
    /// Read directly from shared state rather than over the request
    /// channel, so it answers while the worker is busy animating.
    pub fn phase(&self, seq: u64) -> Option<MovePhase> {
        self.phases.phase(seq)
    }

    /// The shared phase tracker of the session on this worker.
    pub fn phases(&self) -> Arc<PhaseTracker> {
        Arc::clone(&self.phases)
    }

    /// Queue a move. See [`CubeSession::submit`].
    pub fn submit(&self, mv: Move, record: bool) -> Result<MoveReceipt, SubmitError> {
        self.call(|reply| Request::Submit { mv, record, reply })?
    }

    /// See [`CubeSession::undo`].
    pub fn undo(&self) -> Result<Option<MoveReceipt>, SubmitError> {
        self.call(|reply| Request::Undo { reply })?
    }

    /// See [`CubeSession::redo`].
    pub fn redo(&self) -> Result<Option<MoveReceipt>, SubmitError> {
        self.call(|reply| Request::Redo { reply })?
    }

    /// Blocks until all `count` moves have committed.
    pub fn scramble(&self, count: usize) -> Result<Vec<Move>, SubmitError> {
        self.call(|reply| Request::Scramble { count, reply })?
    }

    /// Blocks until the inverse history has been replayed.
    pub fn solve(&self) -> Result<usize, SubmitError> {
        self.call(|reply| Request::Solve { reply })?
    }

    /// See [`CubeSession::rebuild`]. Grid errors come back as
    /// [`SubmitError::Rejected`].
    pub fn rebuild(&self, size: u32) -> Result<(), SubmitError> {
        Ok(self.call(|reply| Request::Rebuild { size, reply })??)
    }

    /// See [`CubeSession::import`]. Validation errors come back as
    /// [`SubmitError::Rejected`].
    pub fn import(&self, record: StateRecord) -> Result<(), SubmitError> {
        let record = Box::new(record);
        Ok(self.call(|reply| Request::Import { record, reply })??)
    }

    /// Snapshot the committed state. Queued moves are not included.
    pub fn export(&self) -> Result<StateRecord, SubmitError> {
        self.call(|reply| Request::Export { reply })
    }

    /// The latest committed frame.
    pub fn frame(&self) -> Result<CubeFrame, SubmitError> {
        self.call(|reply| Request::Frame { reply })
    }

    /// Block until the queue is empty. Returns how many moves ran.
    pub fn wait_idle(&self) -> Result<usize, SubmitError> {
        Ok(self.call(|reply| Request::WaitIdle { reply })??)
    }

    /// Close the channel, let the thread drain its queue, and take the
    /// session back.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SessionRecoveryFailed`] if the thread panicked.
    pub fn shutdown(mut self) -> Result<CubeSession, ConfigError> {
        self.requests.take();
        let thread = self
            .thread
            .take()
            .ok_or(ConfigError::SessionRecoveryFailed)?;
        thread.join().map_err(|_| ConfigError::SessionRecoveryFailed)
    }
}

impl Drop for CubeWorker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!(target: LOG_TARGET, "session thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::FaceLabel;

    #[test]
    fn requests_run_in_order() {
        let worker = CubeWorker::start(CubeConfig::default()).unwrap();
        let a = worker.submit(Move::new(FaceLabel::Up, 2, 1), true).unwrap();
        let b = worker.submit(Move::new(FaceLabel::Up, 2, -1), true).unwrap();
        assert!(b.seq > a.seq);
        worker.wait_idle().unwrap();
        let session = worker.shutdown().unwrap();
        assert!(session.state().is_solved());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn invalid_move_is_rejected_through_worker() {
        let worker = CubeWorker::start(CubeConfig::default()).unwrap();
        let err = worker.submit(Move::new(FaceLabel::Up, 9, 1), true).unwrap_err();
        assert!(matches!(err, SubmitError::Rejected(_)));
        assert!(matches!(worker.rebuild(0), Err(SubmitError::Rejected(_))));
    }

    #[test]
    fn shutdown_drains_queue() {
        let worker = CubeWorker::start(CubeConfig::default()).unwrap();
        for _ in 0..4 {
            worker.submit(Move::new(FaceLabel::Front, 0, 1), true).unwrap();
        }
        let session = worker.shutdown().unwrap();
        assert!(session.is_idle());
        assert_eq!(session.history().len(), 4);
        assert!(session.state().is_solved());
    }

    #[test]
    fn scramble_solve_via_worker() {
        let worker = CubeWorker::start(CubeConfig {
            size: 4,
            seed: 7,
            ..CubeConfig::default()
        })
        .unwrap();
        assert_eq!(worker.scramble(20).unwrap().len(), 20);
        assert_eq!(worker.solve().unwrap(), 20);
        assert_eq!(worker.frame().unwrap().len(), 96);
        let session = worker.shutdown().unwrap();
        assert!(session.state().is_solved());
    }
}
