//! Algebraic properties of layer turns, checked across sizes.

use cubik_arena::CubeState;
use cubik_core::{FaceLabel, Move};
use cubik_turn::apply_turn;
use proptest::prelude::*;

fn turn(state: &mut CubeState, mv: Move) {
    apply_turn(state, mv).unwrap().commit(state).unwrap();
}

fn arb_move(n: u32) -> impl Strategy<Value = Move> {
    (0usize..6, 0..n, -2i32..=2)
        .prop_map(|(f, layer, turns)| Move::new(FaceLabel::ALL[f], layer, turns))
}

fn arb_session() -> impl Strategy<Value = (u32, Vec<Move>)> {
    (1u32..=6).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_move(n), 0..24)))
}

proptest! {
    #[test]
    fn facelet_count_is_conserved((n, moves) in arb_session()) {
        let mut state = CubeState::build(n).unwrap();
        for mv in moves {
            turn(&mut state, mv);
            prop_assert_eq!(state.facelet_count(), 6 * (n as usize).pow(2));
        }
    }

    #[test]
    fn boundary_invariant_holds((n, moves) in arb_session()) {
        let mut state = CubeState::build(n).unwrap();
        for mv in moves {
            turn(&mut state, mv);
            prop_assert!(state.check_boundary().is_ok(), "after {}", mv);
        }
    }

    #[test]
    fn move_then_inverse_is_identity((n, moves) in arb_session(), pick in 0usize..64) {
        let mut state = CubeState::build(n).unwrap();
        for mv in moves {
            turn(&mut state, mv);
        }
        let before = state.cells().to_vec();
        let all: Vec<Move> = FaceLabel::ALL
            .into_iter()
            .flat_map(|f| (0..n).flat_map(move |l| [-2, -1, 1, 2].map(|t| Move::new(f, l, t))))
            .collect();
        let mv = all[pick % all.len()];
        turn(&mut state, mv);
        turn(&mut state, mv.inverse());
        prop_assert_eq!(state.cells(), &before[..]);
    }

    #[test]
    fn quarter_turn_has_order_four((n, moves) in arb_session(), f in 0usize..6, layer in 0u32..6) {
        let mut state = CubeState::build(n).unwrap();
        for mv in moves {
            turn(&mut state, mv);
        }
        let before = state.cells().to_vec();
        let mv = Move::new(FaceLabel::ALL[f], layer % n, 1);
        for _ in 0..4 {
            turn(&mut state, mv);
        }
        prop_assert_eq!(state.cells(), &before[..]);
    }

    #[test]
    fn replaying_inverse_history_solves((n, moves) in arb_session()) {
        let mut state = CubeState::build(n).unwrap();
        let start = state.cells().to_vec();
        for &mv in &moves {
            turn(&mut state, mv);
        }
        for mv in moves.iter().rev() {
            turn(&mut state, mv.inverse());
        }
        prop_assert_eq!(state.cells(), &start[..]);
    }
}

#[test]
fn single_cubie_never_changes_position() {
    let mut state = CubeState::build(1).unwrap();
    for face in FaceLabel::ALL {
        for turns in [-2, -1, 1, 2] {
            turn(&mut state, Move::new(face, 0, turns));
            assert_eq!(state.cells().len(), 1);
            assert_eq!(state.cells()[0].len(), 6);
            state.check_boundary().unwrap();
        }
    }
}

#[test]
fn single_cubie_quarter_turn_relabels() {
    let mut state = CubeState::build(1).unwrap();
    turn(&mut state, Move::new(FaceLabel::Front, 0, 1));
    assert!(!state.is_solved());
    let up = state.cells()[0].get(FaceLabel::Up).unwrap();
    assert_ne!(up.color(), FaceLabel::Up);
}

#[test]
fn up_then_up_prime_on_three_restores() {
    let mut state = CubeState::build(3).unwrap();
    let start = state.cells().to_vec();
    turn(&mut state, Move::new(FaceLabel::Up, 2, 1));
    assert_ne!(state.cells(), &start[..]);
    turn(&mut state, Move::new(FaceLabel::Up, 2, -1));
    assert_eq!(state.cells(), &start[..]);
}
