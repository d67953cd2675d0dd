//! Criterion micro-benchmarks for turn planning and application.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cubik_arena::CubeState;
use cubik_bench::{move_cycle, BENCH_SIZES};
use cubik_core::{Axis, FaceLabel, Move};
use cubik_turn::{apply_turn, relabel, relabel_by_scan};

/// Benchmark: apply (without committing) an outer quarter turn per size.
fn bench_apply_outer_turn(c: &mut Criterion) {
    for n in BENCH_SIZES {
        let state = CubeState::build(n).unwrap();
        let mv = Move::new(FaceLabel::Right, n - 1, 1);
        c.bench_function(&format!("apply_outer_turn_{n}"), |b| {
            b.iter(|| {
                let outcome = apply_turn(&state, mv).unwrap();
                black_box(outcome.affected().len());
            });
        });
    }
}

/// Benchmark: apply and commit 120 mixed moves on a 5x5.
fn bench_commit_cycle(c: &mut Criterion) {
    let moves = move_cycle(5, 120);
    c.bench_function("commit_cycle_5x5_120", |b| {
        b.iter(|| {
            let mut state = CubeState::build(5).unwrap();
            for &mv in &moves {
                apply_turn(&state, mv).unwrap().commit(&mut state).unwrap();
            }
            black_box(state.generation());
        });
    });
}

/// Benchmark: table relabelling against the rotation-matrix scan.
fn bench_relabel(c: &mut Criterion) {
    c.bench_function("relabel_table", |b| {
        b.iter(|| {
            for label in FaceLabel::ALL {
                black_box(relabel(black_box(label), Axis::X, 1));
            }
        });
    });
    c.bench_function("relabel_scan", |b| {
        b.iter(|| {
            for label in FaceLabel::ALL {
                black_box(relabel_by_scan(black_box(label), Axis::X, 1));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_apply_outer_turn,
    bench_commit_cycle,
    bench_relabel
);
criterion_main!(benches);
