//! Cubik quickstart: build a cube, turn it, scramble, undo, solve.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use cubik_core::{FaceLabel, Move};
use cubik_engine::{Animator, CubeConfig, CubeFrame, CubeSession, MoveAnimation};

// ─── A console "renderer" ───────────────────────────────────────

struct ConsoleAnimator;

impl Animator for ConsoleAnimator {
    fn animate(&mut self, animation: &MoveAnimation) {
        println!(
            "  animate #{:<3} {:<7} {} facelets, {:?}, end angle {:+.2} rad",
            animation.seq,
            animation.mv.to_string(),
            animation.start.len(),
            animation.duration,
            animation.angle_at(1.0),
        );
    }

    fn committed(&mut self, frame: &CubeFrame) {
        println!("  frame generation {} ({} facelets)", frame.generation(), frame.len());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CubeConfig {
        size: 4,
        seed: 42,
        ..CubeConfig::default()
    };
    let mut cube = CubeSession::with_animator(config, Box::new(ConsoleAnimator))?;
    println!("built a {0}x{0}x{0} cube", cube.size());

    println!("turning the top layer clockwise:");
    cube.submit(Move::outer(FaceLabel::Up, 1, cube.size()), true)?;
    cube.run_until_idle()?;

    println!("undo:");
    cube.undo()?;
    cube.run_until_idle()?;
    println!("solved again: {}", cube.state().is_solved());

    println!("scrambling 8 moves:");
    let moves = cube.scramble(8)?;
    let notation: Vec<String> = moves.iter().map(ToString::to_string).collect();
    println!("  {}", notation.join(" "));

    let record = cube.export();
    println!("exported {} cubies, {} recorded moves", record.cubies.len(), record.history.len());

    println!("solving:");
    let replayed = cube.solve()?;
    println!("replayed {replayed} inverse moves, solved: {}", cube.state().is_solved());

    let m = cube.metrics();
    println!("{} commits, {} undos, {} rejections", m.commits, m.undos, m.rejections);
    Ok(())
}
