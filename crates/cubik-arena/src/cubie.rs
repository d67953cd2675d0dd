//! A single grid cell and the facelets it carries.

use cubik_core::{FaceLabel, Facelet};

/// One cell of the cube: up to six facelets, each stored under the label
/// of the direction it currently faces.
///
/// Interior cells are empty; surface cells carry one to three facelets
/// (six only for `N = 1`). The slot a facelet occupies changes as the
/// cubie tumbles, the facelet itself never does.
///
/// # Examples
///
/// ```
/// use cubik_arena::Cubie;
/// use cubik_core::{FaceLabel, Facelet, FaceletId};
///
/// let mut cubie = Cubie::empty();
/// let red = Facelet::new(FaceletId::new(FaceLabel::Right, 0));
/// cubie.set(FaceLabel::Front, red);
///
/// assert_eq!(cubie.get(FaceLabel::Front), Some(red));
/// assert_eq!(cubie.len(), 1);
/// assert!(!cubie.is_home());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cubie {
    slots: [Option<Facelet>; 6],
}

impl Cubie {
    /// A cubie with no facelets.
    pub const fn empty() -> Self {
        Self { slots: [None; 6] }
    }

    /// The facelet stored under `label`.
    pub const fn get(&self, label: FaceLabel) -> Option<Facelet> {
        self.slots[label.index()]
    }

    /// Store `facelet` under `label`, returning whatever was there.
    pub fn set(&mut self, label: FaceLabel, facelet: Facelet) -> Option<Facelet> {
        self.slots[label.index()].replace(facelet)
    }

    /// Remove and return the facelet under `label`.
    pub fn take(&mut self, label: FaceLabel) -> Option<Facelet> {
        self.slots[label.index()].take()
    }

    /// Number of facelets carried.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the cubie carries no facelets.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// `(label, facelet)` pairs in [`FaceLabel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceLabel, Facelet)> + '_ {
        FaceLabel::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(label, slot)| slot.map(|f| (label, f)))
    }

    /// Whether every facelet sits under the label of its own colour.
    pub fn is_home(&self) -> bool {
        self.iter().all(|(label, f)| f.color() == label)
    }

    /// Re-key every facelet through `map`, leaving the facelets untouched.
    ///
    /// `map` must be a bijection on labels; the rotation engine passes a
    /// row of its precomputed relabel table.
    pub fn relabeled(&self, map: impl Fn(FaceLabel) -> FaceLabel) -> Self {
        let mut out = Self::empty();
        for (label, facelet) in self.iter() {
            out.set(map(label), facelet);
        }
        out
    }
}
