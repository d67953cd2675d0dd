//! Grid compliance test helpers.
//!
//! These functions verify the invariants every consumer of [`CubeGrid`]
//! relies on. Reused by the grid and geometry test modules.

use crate::grid::CubeGrid;
use cubik_core::{Axis, FaceLabel};
use indexmap::IndexSet;

/// Assert that canonical ordering visits every cell exactly once and
/// agrees with the flat index.
pub fn assert_canonical_ordering_complete(grid: &CubeGrid) {
    let mut seen = IndexSet::new();
    for (i, p) in grid.canonical_ordering().enumerate() {
        assert!(seen.insert(p), "{p} visited twice");
        assert_eq!(grid.index_of(p).unwrap(), i, "index mismatch at {p}");
    }
    assert_eq!(seen.len(), grid.cell_count());
}

/// Assert that the boundary rule yields exactly `N²` cells per label and
/// `6·N²` facelets overall.
pub fn assert_boundary_counts(grid: &CubeGrid) {
    let mut per_label = [0usize; 6];
    for p in grid.canonical_ordering() {
        for label in grid.boundary_labels(p) {
            per_label[label.index()] += 1;
        }
        assert_eq!(grid.is_surface(p), !grid.boundary_labels(p).is_empty());
    }
    for label in FaceLabel::ALL {
        assert_eq!(
            per_label[label.index()],
            grid.size().face_area(),
            "label {label} has the wrong facelet count"
        );
    }
    assert_eq!(per_label.iter().sum::<usize>(), grid.size().facelet_count());
}

/// Assert that the `N` layers along each axis partition the grid.
pub fn assert_layers_partition(grid: &CubeGrid) {
    for axis in Axis::ALL {
        let mut seen = IndexSet::new();
        for layer in 0..grid.n() {
            let plan = grid.layer(axis, layer).unwrap();
            for &i in &plan.indices {
                assert!(seen.insert(i), "cell {i} in two {axis} layers");
            }
        }
        assert_eq!(seen.len(), grid.cell_count());
    }
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &CubeGrid) {
    assert_canonical_ordering_complete(grid);
    assert_boundary_counts(grid);
    assert_layers_partition(grid);
}
