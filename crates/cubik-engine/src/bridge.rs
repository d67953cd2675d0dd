//! The contract between the engine and an external renderer.
//!
//! The renderer never sees cubies. For each move it receives a
//! [`MoveAnimation`]: the affected facelets' poses captured before the
//! move plus the rotation to interpolate. After the commit it receives a
//! full [`CubeFrame`] rebuilt from the new state. Both are owned snapshots,
//! so nothing the renderer does can reach the cube state.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use cubik_core::{Axis, CubeView, FaceLabel, FaceletId, GridSize, Move, Position};
use cubik_space::{CubeGrid, WorldPose};
use indexmap::IndexMap;

use crate::config::Easing;

// ── Poses and frames ───────────────────────────────────────────────

/// Where one facelet is and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceletPose {
    /// Stable identity (colour + per-colour index).
    pub id: FaceletId,
    /// Grid cell holding the facelet.
    pub cell: Position,
    /// Label the facelet is stored under.
    pub label: FaceLabel,
    /// World-space centre and outward normal.
    pub world: WorldPose,
}

/// Every facelet's pose after a commit, keyed by identity in canonical
/// cell order.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeFrame {
    size: GridSize,
    generation: u64,
    poses: IndexMap<FaceletId, FaceletPose>,
}

impl CubeFrame {
    /// Capture the full assignment of `view`.
    ///
    /// `generation` tags the frame so renderers can skip stale ones.
    pub fn capture(view: &dyn CubeView, generation: u64, cubie_size: f32) -> Self {
        let size = view.grid_size();
        let grid = CubeGrid::from_size(size);
        let mut poses = IndexMap::with_capacity(size.facelet_count());
        view.for_each_facelet(&mut |cell, label, facelet| {
            poses.insert(
                facelet.id,
                FaceletPose {
                    id: facelet.id,
                    cell,
                    label,
                    world: grid.facelet_pose(cell, label, cubie_size),
                },
            );
        });
        Self {
            size,
            generation,
            poses,
        }
    }

    /// Grid size the frame was captured from.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of state replacements before this frame was captured.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pose of one facelet.
    pub fn get(&self, id: FaceletId) -> Option<&FaceletPose> {
        self.poses.get(&id)
    }

    /// All poses in canonical cell order.
    pub fn iter(&self) -> impl Iterator<Item = &FaceletPose> + '_ {
        self.poses.values()
    }

    /// Number of facelets (`6·N²` for any reachable state).
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Whether the frame holds no facelets.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

// ── MoveAnimation ──────────────────────────────────────────────────

/// Interpolation contract for one move.
///
/// Captured when the move starts animating. `start` holds the affected
/// facelets exactly as they were before the move; [`poses_at`](MoveAnimation::poses_at)
/// rotates them about the layer's axis through the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveAnimation {
    /// Sequence number of the move being animated.
    pub seq: u64,
    /// The move.
    pub mv: Move,
    /// Rotation axis.
    pub axis: Axis,
    /// Signed quarter turns about `+axis`; positive is clockwise seen from
    /// outside the positive face.
    pub quarters: i32,
    /// How long the renderer should take.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
    /// Pre-move poses of the affected facelets, canonical order.
    pub start: Vec<FaceletPose>,
}

impl MoveAnimation {
    /// Signed rotation angle in radians (right-hand rule about `+axis`)
    /// at linear progress `t`.
    pub fn angle_at(&self, t: f32) -> f32 {
        -(self.quarters as f32) * FRAC_PI_2 * self.easing.apply(t)
    }

    /// Affected facelet poses at linear progress `t ∈ [0, 1]`.
    ///
    /// `cell` and `label` keep their pre-move values; only `world` moves.
    /// At `t = 1` the world poses coincide with the committed ones.
    pub fn poses_at(&self, t: f32) -> Vec<FaceletPose> {
        let (s, c) = self.angle_at(t).sin_cos();
        self.start
            .iter()
            .map(|p| FaceletPose {
                world: WorldPose {
                    position: rotate(p.world.position, self.axis, s, c),
                    normal: rotate(p.world.normal, self.axis, s, c),
                },
                ..*p
            })
            .collect()
    }
}

fn rotate(v: [f32; 3], axis: Axis, s: f32, c: f32) -> [f32; 3] {
    let [x, y, z] = v;
    match axis {
        Axis::X => [x, y * c - z * s, y * s + z * c],
        Axis::Y => [x * c + z * s, y, -x * s + z * c],
        Axis::Z => [x * c - y * s, x * s + y * c, z],
    }
}

// ── Animator ───────────────────────────────────────────────────────

/// Consumer of the engine's per-move presentation contract.
///
/// # Contract
///
/// - [`animate`](Animator::animate) is called once per non-trivial move,
///   after the move leaves the queue and before it commits. It may block
///   for the animation's duration; the session waits and then commits.
///   There is no cancellation: once called, the move will commit.
/// - [`committed`](Animator::committed) is called after every commit
///   (including zero-turn moves) with the full rebuilt frame.
/// - Neither call can reach the cube state; both receive owned snapshots.
pub trait Animator: Send + 'static {
    /// Present a move's transition.
    fn animate(&mut self, animation: &MoveAnimation);

    /// Receive the post-commit frame. Default: ignore it.
    fn committed(&mut self, frame: &CubeFrame) {
        let _ = frame;
    }
}

/// An animator that shows nothing and returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAnimator;

impl Animator for NullAnimator {
    fn animate(&mut self, _animation: &MoveAnimation) {}
}
