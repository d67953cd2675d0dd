//! Plain-data record of a whole session, used for export and import.
//!
//! Fields are raw, unvalidated values: a record may come from an external
//! file. The arena validates a record against its size before installing it.

use smallvec::SmallVec;

use crate::command::Move;
use crate::face::FaceLabel;
use crate::id::{FaceletId, Position};

/// One cubie of an exported state: its position and the facelets it holds,
/// each paired with the label it is currently stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubieRecord {
    /// Grid position of the cubie.
    pub position: Position,
    /// `(current label, facelet identity)` pairs. At most three for a
    /// well-formed cube; empty for interior cells.
    pub facelets: SmallVec<[(FaceLabel, FaceletId); 3]>,
}

/// A complete exported session: size, facelet assignment, and history.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move, StateRecord};
///
/// let record = StateRecord {
///     size: 2,
///     cubies: vec![],
///     history: vec![Move::new(FaceLabel::Up, 1, 1)],
/// };
/// assert_eq!(record.facelet_count(), 0);
/// assert_eq!(record.history.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRecord {
    /// Grid size `N` as stored; zero or out-of-range values are rejected
    /// on import.
    pub size: u32,
    /// Every cubie that carries facelets. Cells not listed are empty.
    pub cubies: Vec<CubieRecord>,
    /// Recorded moves, oldest first.
    pub history: Vec<Move>,
}

impl StateRecord {
    /// Total number of facelets across all cubies.
    pub fn facelet_count(&self) -> usize {
        self.cubies.iter().map(|c| c.facelets.len()).sum()
    }
}
