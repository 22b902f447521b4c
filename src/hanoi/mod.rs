//! Tower of Hanoi.
//!
//! Three pegs: the classic recursion, optimal at `2^n - 1` moves, plus an
//! explicit-stack iterative equivalent producing the identical sequence.
//! Four pegs: the Frame–Stewart decomposition with the split chosen by
//! dynamic programming. Its results are tagged heuristic.
//!
//! # References
//!
//! - Frame (1941), Stewart (1941), solutions to problem 3918,
//!   *American Mathematical Monthly* 48

mod config;
mod generator;
mod puzzle;
mod runner;
mod types;
mod validate;

pub use config::HanoiConfig;
pub use generator::generate_tower;
pub use puzzle::HanoiPuzzle;
pub use runner::{hanoi_moves, optimal_move_count, HanoiRunner, HanoiStrategy};
pub use types::{peg_label, HanoiInstance, HanoiState, Move, MAX_DISKS};
pub use validate::validate_moves;
