//! Error taxonomy for the cube engine.
//!
//! Every variant is a local validation failure surfaced synchronously at
//! the offending call. Validation always runs before mutation, so a
//! returned error means no cube state changed.

use std::error::Error;
use std::fmt;

use crate::id::Position;

/// Errors from building, addressing, turning, or importing a cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CubeError {
    /// The grid size is outside `1..=max`.
    InvalidSize {
        /// The rejected size.
        size: u32,
        /// The largest supported size.
        max: u32,
    },
    /// A position lies outside `[0, size-1]³`.
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid size the position was checked against.
        size: u32,
    },
    /// A layer coordinate lies outside `[0, size-1]`.
    LayerOutOfBounds {
        /// The offending layer coordinate.
        layer: u32,
        /// Grid size the layer was checked against.
        size: u32,
    },
    /// An imported state record is missing data or inconsistent with its size.
    MalformedState {
        /// Human-readable description of the inconsistency.
        reason: String,
    },
}

impl CubeError {
    /// Whether this is one of the out-of-bounds variants.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::PositionOutOfBounds { .. } | Self::LayerOutOfBounds { .. }
        )
    }

    /// Shorthand for [`CubeError::MalformedState`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedState {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "grid size {size} outside supported range 1..={max}")
            }
            Self::PositionOutOfBounds { position, size } => {
                write!(f, "position {position} out of bounds for a {size}x{size}x{size} grid")
            }
            Self::LayerOutOfBounds { layer, size } => {
                write!(f, "layer {layer} out of bounds: expected 0..{size}")
            }
            Self::MalformedState { reason } => write!(f, "malformed state: {reason}"),
        }
    }
}

impl Error for CubeError {}
