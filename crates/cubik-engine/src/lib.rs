//! Session orchestration for Cubik cubes.
//!
//! Provides [`CubeSession`], which owns one cube's state, move queue, and
//! undo/redo history and runs moves strictly one at a time through an
//! [`Animator`]. [`CubeWorker`] runs a session on its own thread and
//! accepts requests over a channel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod history;
pub mod metrics;
pub mod phase;
pub mod queue;
pub mod session;
pub mod worker;

pub use bridge::{Animator, CubeFrame, FaceletPose, MoveAnimation, NullAnimator};
pub use config::{AnimationConfig, ConfigError, CubeConfig, Easing};
pub use history::MoveHistory;
pub use metrics::MoveMetrics;
pub use phase::PhaseTracker;
pub use queue::{MoveOrigin, MovePhase, MoveQueue, MoveReceipt, QueuedMove, SubmitError};
pub use session::{CubeSession, MoveReport};
pub use worker::CubeWorker;
