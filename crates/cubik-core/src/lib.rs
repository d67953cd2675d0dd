//! Core types for the Cubik NxNxN cube engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Cubik workspace:
//! face labels and axes, grid positions and sizes, facelet identities,
//! moves, the serialized state record, the error taxonomy, and the
//! read-only [`CubeView`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod face;
pub mod id;
pub mod record;
pub mod traits;

pub use command::{canonical_turns, Move};
pub use error::CubeError;
pub use face::{Axis, FaceLabel};
pub use id::{Facelet, FaceletId, GridSize, Position, MAX_GRID_SIZE};
pub use record::{CubieRecord, StateRecord};
pub use traits::CubeView;
