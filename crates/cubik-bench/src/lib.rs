//! Benchmark profiles and utilities for Cubik.
//!
//! Provides preset session configurations and deterministic move lists
//! shared by the criterion benches.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use cubik_core::{FaceLabel, Move};
use std::error::Error;

use cubik_engine::{CubeConfig, CubeSession};

/// Sizes swept by the per-size benches.
pub const BENCH_SIZES: [u32; 4] = [2, 3, 5, 8];

/// Default config at size `n` with a fixed seed.
pub fn reference_profile(n: u32, seed: u64) -> CubeConfig {
    CubeConfig {
        size: n,
        seed,
        max_queue: 4096,
        ..CubeConfig::default()
    }
}

/// A session of size `n` with `count` committed scramble moves.
pub fn scrambled_profile(
    n: u32,
    count: usize,
    seed: u64,
) -> Result<CubeSession, Box<dyn Error>> {
    let mut session = CubeSession::new(reference_profile(n, seed))?;
    session.scramble(count)?;
    Ok(session)
}

/// Generate `count` moves cycling every face, every layer of a size-`n`
/// cube, and every turn amount.
///
/// The sequence depends only on `n` and `count`, so two benches that use
/// the same arguments time identical work.
pub fn move_cycle(n: u32, count: usize) -> Vec<Move> {
    const TURNS: [i32; 4] = [1, -1, 2, -2];
    (0..count)
        .map(|i| {
            let face = FaceLabel::ALL[i % FaceLabel::ALL.len()];
            let layer = (i / FaceLabel::ALL.len()) as u32 % n.max(1);
            Move::new(face, layer, TURNS[i % TURNS.len()])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        for n in BENCH_SIZES {
            reference_profile(n, 42).validate().unwrap();
        }
    }

    #[test]
    fn move_cycle_is_deterministic_and_in_range() {
        let a = move_cycle(3, 100);
        assert_eq!(a, move_cycle(3, 100));
        assert!(a.iter().all(|mv| mv.layer() < 3));
    }

    #[test]
    fn scrambled_profile_commits_every_move() {
        let session = scrambled_profile(3, 25, 7).unwrap();
        assert_eq!(session.history().len(), 25);
    }
}
