//! Layer rotation for the Cubik cube engine.
//!
//! A [`Move`](cubik_core::Move) is compiled into a [`TurnPlan`]: the layer's
//! cells, the signed [`QuarterTurn`] to apply, and how many times. Running
//! the plan against a [`CubeState`](cubik_arena::CubeState) yields a
//! [`TurnOutcome`] holding the complete replacement assignment, which the
//! caller commits in one step. Nothing is mutated until that commit.
//!
//! Positions rotate on doubled centred coordinates so every step is exact
//! integer arithmetic. Facelet labels rotate through a table computed at
//! compile time from the nearest-normal rule ([`relabel`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod apply;
pub mod plan;
pub mod quarter;
pub mod relabel;

pub use apply::{apply_turn, TurnOutcome};
pub use plan::TurnPlan;
pub use quarter::QuarterTurn;
pub use relabel::{relabel, relabel_by_scan};
