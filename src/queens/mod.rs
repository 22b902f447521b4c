//! N-Queens.
//!
//! Column-by-column backtracking with O(1) row and diagonal occupancy
//! checks. [`QueensMode::Parallel`] fixes the first-column row to split the
//! tree into `n` independent subtrees run on a rayon pool of at most `n`
//! threads; every worker returns its own placements and one merge pass
//! sorts and deduplicates them, so both modes return the same set.
//!
//! With [`QueensGoal::First`] a shared stop flag is checked at every
//! recursion step and set by whichever worker finds a placement first.

mod config;
mod puzzle;
mod runner;
mod types;
mod validate;

pub use config::{QueensConfig, QueensGoal, MAX_QUEENS};
pub use puzzle::QueensPuzzle;
pub use runner::{QueensMode, QueensRunner};
pub use types::{Placement, QueensInstance, QueensSolution};
pub use validate::validate_placements;
