//! State comparison and replay verification.
//!
//! Provides hash-first comparison (fast path) with a per-slot fallback on
//! mismatch, plus drivers that re-run a move log and stop at the first
//! divergence.

use std::io::Read;

use cubik_core::{CubeView, FaceLabel, FaceletId, Position};
use cubik_engine::{CubeConfig, CubeSession};

use crate::error::ReplayError;
use crate::hash::state_hash;
use crate::reader::MoveLogReader;
use crate::types::LogFrame;

/// One slot whose contents differ between recorded and replayed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotDivergence {
    /// Cell of the slot.
    pub position: Position,
    /// Label of the slot.
    pub label: FaceLabel,
    /// What the recorded state holds there.
    pub recorded: Option<FaceletId>,
    /// What the replayed state holds there.
    pub replayed: Option<FaceletId>,
}

/// Where and how a replay diverged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Frame index; 0 is the initial state, `k` the state after the
    /// `k`-th logged move.
    pub index: u64,
    /// Sequence number of the logged move, if the divergence follows one.
    pub seq: Option<u64>,
    /// Hash from the log.
    pub recorded_hash: u64,
    /// Hash of the replayed state.
    pub replayed_hash: u64,
    /// Slot-level detail; empty unless recorded state was supplied.
    pub divergences: Vec<SlotDivergence>,
}

impl DivergenceReport {
    fn into_error(self) -> ReplayError {
        ReplayError::HashMismatch {
            index: self.index,
            recorded: self.recorded_hash,
            replayed: self.replayed_hash,
        }
    }
}

/// Compare a replayed state against a recorded hash.
///
/// Fast path: hash and compare. On mismatch, if `recorded` is given and
/// has the same size, every slot is compared to list exactly which
/// differ.
pub fn compare_state(
    replayed: &dyn CubeView,
    recorded_hash: u64,
    index: u64,
    recorded: Option<&dyn CubeView>,
) -> Option<DivergenceReport> {
    let replayed_hash = state_hash(replayed);
    if replayed_hash == recorded_hash {
        return None;
    }

    let mut divergences = Vec::new();
    if let Some(recorded) = recorded.filter(|r| r.grid_size() == replayed.grid_size()) {
        let n = replayed.grid_size().get();
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let position = Position::new(x, y, z);
                    for label in FaceLabel::ALL {
                        let rec = recorded.facelet(position, label).map(|f| f.id);
                        let rep = replayed.facelet(position, label).map(|f| f.id);
                        if rec != rep {
                            divergences.push(SlotDivergence {
                                position,
                                label,
                                recorded: rec,
                                replayed: rep,
                            });
                        }
                    }
                }
            }
        }
    }

    Some(DivergenceReport {
        index,
        seq: None,
        recorded_hash,
        replayed_hash,
        divergences,
    })
}

/// Replay a log through a caller-provided step function and compare state
/// hashes after every frame.
///
/// `step_fn` receives each logged frame, applies its move to whatever the
/// caller is driving, and returns the hash of the resulting state.
///
/// Returns `Ok(None)` if every frame matches, or `Ok(Some(report))` at the
/// first divergence (hash detail only).
pub fn replay_and_compare<R: Read>(
    mut reader: MoveLogReader<R>,
    step_fn: &mut dyn FnMut(&LogFrame) -> Result<u64, ReplayError>,
) -> Result<Option<DivergenceReport>, ReplayError> {
    while let Some(frame) = reader.next_frame()? {
        let replayed_hash = step_fn(&frame)?;
        if replayed_hash != frame.state_hash {
            return Ok(Some(DivergenceReport {
                index: reader.frames_read(),
                seq: Some(frame.seq),
                recorded_hash: frame.state_hash,
                replayed_hash,
                divergences: Vec::new(),
            }));
        }
    }
    Ok(None)
}

/// Rebuild `session` from the log header and re-run every logged move.
///
/// The session is rebuilt at the logged size and reseeded, then its
/// starting state is checked against the header. Each frame's move is
/// submitted (recorded or not, per its origin) and run to commit before
/// its hash is compared.
pub fn replay_session<R: Read>(
    reader: MoveLogReader<R>,
    session: &mut CubeSession,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let header = reader.header().clone();
    session.rebuild(header.size)?;
    session.reseed(header.seed);
    if let Some(report) = compare_state(session.state(), header.initial_hash, 0, None) {
        return Ok(Some(report));
    }
    replay_and_compare(reader, &mut |frame| {
        session.submit(frame.mv, frame.origin.records())?;
        session.run_until_idle()?;
        Ok(state_hash(session.state()))
    })
}

/// Replay a log on a fresh session built from its header and return it.
///
/// # Errors
///
/// [`ReplayError::HashMismatch`] at the first divergence, or any decode,
/// submission, or header error.
pub fn verify_log<R: Read>(reader: MoveLogReader<R>) -> Result<CubeSession, ReplayError> {
    let header = reader.header();
    let config = CubeConfig {
        size: header.size,
        seed: header.seed,
        ..CubeConfig::default()
    };
    let mut session = CubeSession::new(config).map_err(|e| ReplayError::MalformedRecord {
        detail: format!("log header describes an unusable session: {e}"),
    })?;
    match replay_session(reader, &mut session)? {
        Some(report) => Err(report.into_error()),
        None => Ok(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::{Facelet, GridSize};
    use cubik_test_utils::MockCubeView;

    fn solved(n: u32) -> MockCubeView {
        MockCubeView::solved(GridSize::new(n).unwrap())
    }

    #[test]
    fn matching_states_return_none() {
        let view = solved(2);
        let hash = state_hash(&view);
        assert!(compare_state(&view, hash, 3, Some(&view)).is_none());
    }

    #[test]
    fn divergent_states_list_slots() {
        let recorded = solved(2);
        let mut replayed = solved(2);
        let p = Position::new(1, 1, 1);
        let moved = replayed.clear(p, FaceLabel::Up).unwrap();
        replayed.set(p, FaceLabel::Front, Facelet::new(moved.id));
        replayed.set(p, FaceLabel::Up, Facelet::new(FaceletId::new(FaceLabel::Front, 3)));

        let report = compare_state(&replayed, state_hash(&recorded), 7, Some(&recorded)).unwrap();
        assert_eq!(report.index, 7);
        assert_eq!(report.divergences.len(), 2);
        assert!(report
            .divergences
            .iter()
            .all(|d| d.position == p && d.recorded != d.replayed));
    }

    #[test]
    fn hash_only_comparison_has_no_detail() {
        let view = solved(3);
        let report = compare_state(&view, 0xDEAD, 1, None).unwrap();
        assert!(report.divergences.is_empty());
        assert_eq!(report.recorded_hash, 0xDEAD);
    }

    #[test]
    fn size_mismatch_has_no_detail() {
        let a = solved(2);
        let b = solved(3);
        let report = compare_state(&a, state_hash(&b), 0, Some(&b)).unwrap();
        assert!(report.divergences.is_empty());
    }
}
