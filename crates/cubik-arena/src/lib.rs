//! Cube state storage for the Cubik engine.
//!
//! The whole cube lives in one flat `Vec<Cubie>` of length `N³`, indexed
//! by [`CubeGrid`](cubik_space::CubeGrid)'s canonical order. A [`Cubie`] is
//! a fixed six-slot record keyed by the label each facelet currently
//! renders as, so copying a cubie is a plain value copy.
//!
//! ```text
//! CubeState
//! ├── CubeGrid (size, indexing, boundary rule)
//! ├── Vec<Cubie> × N³ (flat arena, canonical order)
//! │   └── [Option<Facelet>; 6] (slot = current FaceLabel)
//! └── generation (bumped on every replace)
//! ```
//!
//! State is never patched in place by rotations: the rotation engine
//! produces a complete replacement assignment and [`CubeState::replace`]
//! swaps it in as one step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cubie;
pub mod record;
pub mod state;

pub use cubie::Cubie;
pub use state::CubeState;
