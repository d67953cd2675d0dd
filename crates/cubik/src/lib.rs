//! Cubik: a deterministic N×N×N twisty-cube engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Cubik sub-crates. For most users, adding `cubik` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cubik::prelude::*;
//!
//! let mut session = CubeSession::new(CubeConfig {
//!     size: 4,
//!     seed: 42,
//!     ..CubeConfig::default()
//! })
//! .unwrap();
//!
//! // Turn the outer Up layer a quarter clockwise, then an inner slice.
//! session.submit(Move::new(FaceLabel::Up, 3, 1), true).unwrap();
//! session.submit(Move::new(FaceLabel::Right, 1, 2), true).unwrap();
//! assert_eq!(session.run_until_idle().unwrap(), 2);
//! assert!(!session.state().is_solved());
//!
//! session.scramble(20).unwrap();
//! assert_eq!(session.solve().unwrap(), 22);
//! assert!(session.state().is_solved());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cubik-core` | Faces, positions, moves, records, errors, `CubeView` |
//! | [`space`] | `cubik-space` | Grid geometry, layer selection, world poses |
//! | [`arena`] | `cubik-arena` | Cubie storage and `CubeState` |
//! | [`turn`] | `cubik-turn` | Turn planning, relabelling, and application |
//! | [`engine`] | `cubik-engine` | Sessions, queue, history, animation bridge, worker |
//! | [`replay`] | `cubik-replay` | Record files, move logs, and determinism checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`cubik-core`).
///
/// Contains [`types::FaceLabel`], [`types::Position`], [`types::Move`],
/// [`types::StateRecord`], and the read-only [`types::CubeView`] trait.
pub use cubik_core as types;

/// Grid geometry (`cubik-space`).
///
/// [`space::CubeGrid`] enumerates cells and selects layers.
pub use cubik_space as space;

/// Cubie storage (`cubik-arena`).
///
/// [`arena::CubeState`] owns every cubie and is the only mutable state.
pub use cubik_arena as arena;

/// Turn planning and application (`cubik-turn`).
///
/// [`turn::apply_turn`] computes a [`turn::TurnOutcome`] that the caller
/// commits.
pub use cubik_turn as turn;

/// Sessions and the animation bridge (`cubik-engine`).
///
/// [`engine::CubeSession`] for single-threaded driving,
/// [`engine::CubeWorker`] for a background session thread.
pub use cubik_engine as engine;

/// Record files and move logs (`cubik-replay`).
///
/// Write logs with [`replay::MoveLogWriter`], check them with
/// [`replay::verify_log`].
pub use cubik_replay as replay;

/// Common imports for typical Cubik usage.
///
/// ```rust
/// use cubik::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use cubik_core::{
        Axis, CubeView, FaceLabel, Facelet, FaceletId, GridSize, Move, Position, StateRecord,
    };

    // Errors
    pub use cubik_core::CubeError;
    pub use cubik_engine::{ConfigError, SubmitError};
    pub use cubik_replay::ReplayError;

    // State
    pub use cubik_arena::CubeState;

    // Engine
    pub use cubik_engine::{
        AnimationConfig, Animator, CubeConfig, CubeFrame, CubeSession, CubeWorker, MoveAnimation,
        MoveOrigin, MovePhase, MoveReceipt, MoveReport, NullAnimator,
    };

    // Replay
    pub use cubik_replay::{verify_log, MoveLogReader, MoveLogWriter};
}
