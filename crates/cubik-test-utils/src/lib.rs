//! Test utilities and mock types for Cubik development.
//!
//! Provides a mock [`CubeView`] backed by a plain map, plus recording and
//! misbehaving [`Animator`](cubik_engine::Animator) fixtures and session
//! builders for integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use cubik_core::{CubeView, FaceLabel, Facelet, FaceletId, GridSize, Position};

pub use fixtures::{
    config, scrambled_session, AnimationEvent, PanickingAnimator, RecordingAnimator,
    SleepingAnimator,
};

/// Mock implementation of [`CubeView`].
///
/// Backed by a `HashMap<(Position, FaceLabel), Facelet>`. Populate it with
/// [`set`](MockCubeView::set) before passing it to code under test.
pub struct MockCubeView {
    size: GridSize,
    facelets: HashMap<(Position, FaceLabel), Facelet>,
}

impl MockCubeView {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            facelets: HashMap::new(),
        }
    }

    /// A view whose every surface slot holds a facelet of the slot's own
    /// colour, numbered per colour in canonical order.
    pub fn solved(size: GridSize) -> Self {
        let mut view = Self::new(size);
        let n = size.get();
        let mut next = [0u16; 6];
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let position = Position::new(x, y, z);
                    for label in FaceLabel::ALL {
                        if position.coord(label.axis()) == label.boundary_coord(n) {
                            let index = next[label.index()];
                            next[label.index()] += 1;
                            view.set(position, label, Facelet::new(FaceletId::new(label, index)));
                        }
                    }
                }
            }
        }
        view
    }

    /// Store `facelet` under `label` at `position`.
    pub fn set(&mut self, position: Position, label: FaceLabel, facelet: Facelet) {
        self.facelets.insert((position, label), facelet);
    }

    /// Remove whatever is stored under `label` at `position`.
    pub fn clear(&mut self, position: Position, label: FaceLabel) -> Option<Facelet> {
        self.facelets.remove(&(position, label))
    }

    pub fn len(&self) -> usize {
        self.facelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facelets.is_empty()
    }
}

impl CubeView for MockCubeView {
    fn grid_size(&self) -> GridSize {
        self.size
    }

    fn facelet(&self, position: Position, label: FaceLabel) -> Option<Facelet> {
        self.facelets.get(&(position, label)).copied()
    }
}
