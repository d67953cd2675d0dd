//! Centred coordinates and world-space placement.

use cubik_core::{FaceLabel, Position};

use crate::grid::CubeGrid;

/// World-space placement of one facelet: where its centre sits and which
/// way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPose {
    /// Facelet centre.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

impl CubeGrid {
    /// Doubled centred coordinates of `position`: `2p - (N - 1)` per axis.
    ///
    /// The cube's centre maps to the origin and neighbouring cells differ
    /// by 2, so a 90° rotation about any axis is an exact integer map.
    ///
    /// ```
    /// use cubik_core::Position;
    /// use cubik_space::CubeGrid;
    ///
    /// let even = CubeGrid::new(2).unwrap();
    /// assert_eq!(even.doubled(Position::new(0, 1, 0)), [-1, 1, -1]);
    /// let odd = CubeGrid::new(3).unwrap();
    /// assert_eq!(odd.doubled(Position::new(1, 1, 2)), [0, 0, 2]);
    /// ```
    pub fn doubled(&self, position: Position) -> [i32; 3] {
        let offset = self.n() as i32 - 1;
        position.to_array().map(|c| 2 * c as i32 - offset)
    }

    /// Inverse of [`doubled`](CubeGrid::doubled). `None` if the triple does
    /// not name a cell of this grid.
    pub fn from_doubled(&self, c: [i32; 3]) -> Option<Position> {
        let offset = self.n() as i32 - 1;
        let mut out = [0u32; 3];
        for (slot, v) in out.iter_mut().zip(c) {
            let twice = v + offset;
            if twice < 0 || twice % 2 != 0 {
                return None;
            }
            *slot = (twice / 2) as u32;
        }
        let p = Position::from_array(out);
        self.contains(p).then_some(p)
    }

    /// Centre of the cubie at `position`, for cubies of edge `cubie_size`
    /// with the cube centred on the origin.
    pub fn world_center(&self, position: Position, cubie_size: f32) -> [f32; 3] {
        let half = cubie_size * 0.5;
        self.doubled(position).map(|c| c as f32 * half)
    }

    /// Pose of the facelet stored under `label` on the cubie at `position`.
    ///
    /// The facelet sits on the cubie's outer surface, half a cubie out
    /// along `label`'s normal.
    pub fn facelet_pose(&self, position: Position, label: FaceLabel, cubie_size: f32) -> WorldPose {
        let center = self.world_center(position, cubie_size);
        let normal = label.normal().map(|c| c as f32);
        let half = cubie_size * 0.5;
        WorldPose {
            position: [
                center[0] + normal[0] * half,
                center[1] + normal[1] * half,
                center[2] + normal[2] * half,
            ],
            normal,
        }
    }
}
