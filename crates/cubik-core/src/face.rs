//! Face labels, principal axes, and their outward normals.
//!
//! The six-label set and the label ↔ normal mapping are fixed for the
//! life of the process. Normals use the renderer's right-handed frame:
//! `+X` right, `+Y` up, `+Z` towards the viewer (front).

use std::fmt;

/// One of the three principal axes of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Left ↔ Right.
    X,
    /// Down ↔ Up.
    Y,
    /// Back ↔ Front.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in an `[x, y, z]` triple.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along the positive direction of this axis.
    pub const fn unit(self) -> [i32; 3] {
        match self {
            Axis::X => [1, 0, 0],
            Axis::Y => [0, 1, 0],
            Axis::Z => [0, 0, 1],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// One of the six faces of the cube.
///
/// A label names both an outward direction (the face a facelet currently
/// renders as) and a colour identity (the face a facelet was created on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceLabel {
    /// `+Y`.
    Up,
    /// `-Y`.
    Down,
    /// `+Z`.
    Front,
    /// `-Z`.
    Back,
    /// `-X`.
    Left,
    /// `+X`.
    Right,
}

impl FaceLabel {
    /// All labels in index order.
    pub const ALL: [FaceLabel; 6] = [
        FaceLabel::Up,
        FaceLabel::Down,
        FaceLabel::Front,
        FaceLabel::Back,
        FaceLabel::Left,
        FaceLabel::Right,
    ];

    /// Dense index in `0..6`, matching [`FaceLabel::ALL`].
    pub const fn index(self) -> usize {
        match self {
            FaceLabel::Up => 0,
            FaceLabel::Down => 1,
            FaceLabel::Front => 2,
            FaceLabel::Back => 3,
            FaceLabel::Left => 4,
            FaceLabel::Right => 5,
        }
    }

    /// Inverse of [`index`](FaceLabel::index).
    pub const fn from_index(index: usize) -> Option<FaceLabel> {
        if index < 6 {
            Some(FaceLabel::ALL[index])
        } else {
            None
        }
    }

    /// The axis this face's normal lies on.
    pub const fn axis(self) -> Axis {
        match self {
            FaceLabel::Up | FaceLabel::Down => Axis::Y,
            FaceLabel::Front | FaceLabel::Back => Axis::Z,
            FaceLabel::Left | FaceLabel::Right => Axis::X,
        }
    }

    /// Unit outward normal.
    pub const fn normal(self) -> [i32; 3] {
        match self {
            FaceLabel::Up => [0, 1, 0],
            FaceLabel::Down => [0, -1, 0],
            FaceLabel::Front => [0, 0, 1],
            FaceLabel::Back => [0, 0, -1],
            FaceLabel::Left => [-1, 0, 0],
            FaceLabel::Right => [1, 0, 0],
        }
    }

    /// Per-face handedness of a positive turn.
    ///
    /// `+1` when clockwise-from-outside is clockwise looking down the
    /// positive axis, `-1` when the face looks down the negative axis.
    pub const fn orientation(self) -> i32 {
        match self {
            FaceLabel::Up | FaceLabel::Front | FaceLabel::Right => 1,
            FaceLabel::Down | FaceLabel::Back | FaceLabel::Left => -1,
        }
    }

    /// The face on the other side of the cube.
    pub const fn opposite(self) -> FaceLabel {
        match self {
            FaceLabel::Up => FaceLabel::Down,
            FaceLabel::Down => FaceLabel::Up,
            FaceLabel::Front => FaceLabel::Back,
            FaceLabel::Back => FaceLabel::Front,
            FaceLabel::Left => FaceLabel::Right,
            FaceLabel::Right => FaceLabel::Left,
        }
    }

    /// Coordinate along [`axis`](FaceLabel::axis) of this face's outer layer.
    pub const fn boundary_coord(self, size: u32) -> u32 {
        if self.orientation() > 0 {
            size.saturating_sub(1)
        } else {
            0
        }
    }

    /// Display colour as `0xRRGGBB`.
    pub const fn color(self) -> u32 {
        match self {
            FaceLabel::Up => 0xFFFFFF,
            FaceLabel::Down => 0xFFD500,
            FaceLabel::Front => 0x009B48,
            FaceLabel::Back => 0x0046AD,
            FaceLabel::Left => 0xFF5800,
            FaceLabel::Right => 0xB71234,
        }
    }

    /// Single-letter move notation (`U`, `D`, `F`, `B`, `L`, `R`).
    pub const fn letter(self) -> char {
        match self {
            FaceLabel::Up => 'U',
            FaceLabel::Down => 'D',
            FaceLabel::Front => 'F',
            FaceLabel::Back => 'B',
            FaceLabel::Left => 'L',
            FaceLabel::Right => 'R',
        }
    }

    /// Parse a notation letter. Case-insensitive.
    pub fn from_letter(c: char) -> Option<FaceLabel> {
        FaceLabel::ALL
            .into_iter()
            .find(|label| label.letter() == c.to_ascii_uppercase())
    }

    /// The label whose normal has the largest dot product with `normal`.
    ///
    /// Linear scan over the six candidates. Ties cannot occur for
    /// axis-aligned inputs; for anything else the first maximum wins.
    pub const fn nearest(normal: [i32; 3]) -> FaceLabel {
        let mut best = FaceLabel::ALL[0];
        let mut best_dot = i32::MIN;
        let mut i = 0;
        while i < 6 {
            let n = FaceLabel::ALL[i].normal();
            let dot = n[0] * normal[0] + n[1] * normal[1] + n[2] * normal[2];
            if dot > best_dot {
                best_dot = dot;
                best = FaceLabel::ALL[i];
            }
            i += 1;
        }
        best
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, label) in FaceLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(FaceLabel::from_index(i), Some(*label));
        }
        assert_eq!(FaceLabel::from_index(6), None);
    }

    #[test]
    fn normals_lie_on_their_axis() {
        for label in FaceLabel::ALL {
            let n = label.normal();
            let axis = label.axis().index();
            assert_eq!(n[axis], label.orientation());
            assert_eq!(n.iter().map(|v| v.abs()).sum::<i32>(), 1);
        }
    }

    #[test]
    fn opposite_is_an_involution_with_negated_normal() {
        for label in FaceLabel::ALL {
            assert_eq!(label.opposite().opposite(), label);
            let n = label.normal();
            let o = label.opposite().normal();
            assert_eq!([-n[0], -n[1], -n[2]], o);
        }
    }

    #[test]
    fn nearest_recovers_every_normal() {
        for label in FaceLabel::ALL {
            assert_eq!(FaceLabel::nearest(label.normal()), label);
        }
    }

    #[test]
    fn boundary_coord_matches_orientation() {
        assert_eq!(FaceLabel::Up.boundary_coord(5), 4);
        assert_eq!(FaceLabel::Down.boundary_coord(5), 0);
        assert_eq!(FaceLabel::Left.boundary_coord(1), 0);
        assert_eq!(FaceLabel::Right.boundary_coord(1), 0);
    }

    #[test]
    fn letters_parse_back() {
        for label in FaceLabel::ALL {
            assert_eq!(FaceLabel::from_letter(label.letter()), Some(label));
        }
        assert_eq!(FaceLabel::from_letter('r'), Some(FaceLabel::Right));
        assert_eq!(FaceLabel::from_letter('x'), None);
    }

    #[test]
    fn colors_are_distinct() {
        let mut colors: Vec<u32> = FaceLabel::ALL.iter().map(|l| l.color()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }
}
