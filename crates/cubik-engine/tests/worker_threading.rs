//! The threaded worker: submissions during an animation, shutdown drain,
//! back-pressure, and recovery after an animator panic.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use cubik_core::{FaceLabel, Move};
use cubik_engine::{Animator, ConfigError, CubeWorker, MoveAnimation, MovePhase, SubmitError};
use cubik_test_utils::{config, PanickingAnimator, RecordingAnimator, SleepingAnimator};

#[test]
fn submissions_during_animation_queue_behind_it() {
    let rec = RecordingAnimator::new();
    let animator = SleepingAnimator::new(Duration::from_millis(5), rec.clone());
    let worker = CubeWorker::start_with_animator(config(3, 0), Box::new(animator)).unwrap();

    let mut seqs = Vec::new();
    for face in FaceLabel::ALL {
        seqs.push(worker.submit(Move::new(face, 1, 1), true).unwrap().seq);
    }
    worker.wait_idle().unwrap();

    assert_eq!(rec.animated(), seqs);
    assert_eq!(rec.overlaps(), 0);
    let record = worker.export().unwrap();
    assert_eq!(record.history.len(), 6);
}

#[test]
fn handles_can_be_shared_across_threads() {
    let worker = CubeWorker::start(config(3, 0)).unwrap();
    thread::scope(|scope| {
        for face in [FaceLabel::Up, FaceLabel::Front] {
            let w = &worker;
            scope.spawn(move || {
                for _ in 0..4 {
                    w.submit(Move::new(face, 2, 1), true).unwrap();
                }
            });
        }
    });
    let session = worker.shutdown().unwrap();
    assert_eq!(session.history().len(), 8);
    assert_eq!(session.metrics().commits, 8);
    assert_eq!(session.state().facelet_count(), 54);
}

#[test]
fn undo_and_redo_round_trip_through_worker() {
    let worker = CubeWorker::start(config(4, 3)).unwrap();
    worker.scramble(10).unwrap();
    let before = worker.export().unwrap();
    worker.undo().unwrap();
    worker.redo().unwrap();
    worker.wait_idle().unwrap();
    assert_eq!(worker.export().unwrap(), before);
}

#[test]
fn import_through_worker_validates() {
    let worker = CubeWorker::start(config(3, 0)).unwrap();
    let mut record = worker.export().unwrap();
    record.size = 0;
    assert!(matches!(worker.import(record), Err(SubmitError::Rejected(_))));
    worker.rebuild(2).unwrap();
    assert_eq!(worker.frame().unwrap().len(), 24);
}

#[test]
fn animator_panic_loses_the_session() {
    let worker =
        CubeWorker::start_with_animator(config(3, 0), Box::new(PanickingAnimator::new(1)))
            .unwrap();
    worker.submit(Move::new(FaceLabel::Up, 2, 1), true).unwrap();
    worker.submit(Move::new(FaceLabel::Up, 2, 1), true).unwrap();
    assert_eq!(worker.wait_idle(), Err(SubmitError::Shutdown));
    assert_eq!(
        worker.shutdown().err(),
        Some(ConfigError::SessionRecoveryFailed)
    );
}

/// Holds each animation open until the test releases it.
struct GateAnimator {
    started: Sender<u64>,
    release: Receiver<()>,
}

impl Animator for GateAnimator {
    fn animate(&mut self, animation: &MoveAnimation) {
        let _ = self.started.send(animation.seq);
        let _ = self.release.recv();
    }
}

#[test]
fn phase_is_animating_while_the_worker_presents_a_move() {
    let (started_tx, started_rx) = unbounded();
    let (release_tx, release_rx) = unbounded();
    let gate = GateAnimator {
        started: started_tx,
        release: release_rx,
    };
    let worker = CubeWorker::start_with_animator(config(3, 0), Box::new(gate)).unwrap();

    let receipt = worker.submit(Move::new(FaceLabel::Up, 2, 1), true).unwrap();
    assert_eq!(started_rx.recv().unwrap(), receipt.seq);
    assert_eq!(worker.phase(receipt.seq), Some(MovePhase::Animating));
    assert_eq!(worker.phases().animating(), Some(receipt.seq));

    release_tx.send(()).unwrap();
    worker.wait_idle().unwrap();
    assert_eq!(worker.phase(receipt.seq), Some(MovePhase::Committed));
    assert_eq!(worker.phases().animating(), None);
}

#[test]
fn undo_right_after_a_click_undoes_that_click() {
    let animator = SleepingAnimator::new(Duration::from_millis(2), RecordingAnimator::new());
    let worker = CubeWorker::start_with_animator(config(3, 0), Box::new(animator)).unwrap();
    let a = Move::new(FaceLabel::Up, 2, 1);
    let b = Move::new(FaceLabel::Right, 2, 1);
    worker.submit(a, true).unwrap();
    worker.wait_idle().unwrap();

    worker.submit(b, true).unwrap();
    assert!(worker.undo().unwrap().is_some());
    worker.wait_idle().unwrap();
    assert_eq!(worker.export().unwrap().history, vec![a]);

    assert_eq!(worker.solve().unwrap(), 1);
    let session = worker.shutdown().unwrap();
    assert!(session.state().is_solved());
}
