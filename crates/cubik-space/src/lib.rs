//! Grid model for the Cubik cube engine.
//!
//! [`CubeGrid`] is the pure description of an NxNxN lattice: which cells
//! exist, how they map onto a flat arena index, which face labels a cell
//! must carry facelets for, and which cells make up a rotatable layer.
//! It holds no mutable state and is cheap to copy.
//!
//! # Geometry
//!
//! Rotation arithmetic runs on *doubled centred* coordinates
//! (`2p - (N - 1)`), which keep the cube's centre at the origin while
//! staying in integers for both odd and even `N`. World-space positions
//! for rendering are derived from the same coordinates; see
//! [`CubeGrid::doubled`] and [`CubeGrid::facelet_pose`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use geometry::WorldPose;
pub use grid::{CubeGrid, LayerPlan};
