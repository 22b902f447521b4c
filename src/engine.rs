//! The instance / solve / validate contract shared by every puzzle.
//!
//! Each family implements [`Puzzle`] on a zero-sized marker type
//! ([`MaxFlowPuzzle`](crate::flow::MaxFlowPuzzle),
//! [`ShortestPathPuzzle`](crate::path::ShortestPathPuzzle), ...). Callers
//! that pick the puzzle at run time dispatch on [`PuzzleKind`].
//!
//! # Examples
//!
//! ```
//! use u_puzzle::engine::Puzzle;
//! use u_puzzle::hanoi::{HanoiConfig, HanoiPuzzle, HanoiStrategy};
//!
//! let config = HanoiConfig::default().with_num_disks(4);
//! let instance = HanoiPuzzle::generate_instance(&config).unwrap();
//! let result = HanoiPuzzle::solve_checked(&instance, HanoiStrategy::Recursive).unwrap();
//! assert_eq!(HanoiPuzzle::objective(&result.solution), Some(15));
//! ```

use crate::error::{EngineError, Result};
use crate::result::SolverResult;
use crate::validation::Verdict;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag for each puzzle family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PuzzleKind {
    MaxFlow,
    ShortestPath,
    Tsp,
    Hanoi,
    NQueens,
}

impl PuzzleKind {
    pub const ALL: [PuzzleKind; 5] = [
        PuzzleKind::MaxFlow,
        PuzzleKind::ShortestPath,
        PuzzleKind::Tsp,
        PuzzleKind::Hanoi,
        PuzzleKind::NQueens,
    ];

    /// Stable identifier used in performance records.
    pub fn id(self) -> &'static str {
        match self {
            PuzzleKind::MaxFlow => "max_flow",
            PuzzleKind::ShortestPath => "shortest_path",
            PuzzleKind::Tsp => "tsp",
            PuzzleKind::Hanoi => "hanoi",
            PuzzleKind::NQueens => "n_queens",
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PuzzleKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        PuzzleKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| EngineError::invalid_config(format!("unknown puzzle id {s:?}")))
    }
}

/// One puzzle family.
///
/// Instances are immutable once generated; `solve` only mutates its own
/// working state. `validate` must not trust anything the solver computed
/// beyond the solution itself.
pub trait Puzzle {
    const KIND: PuzzleKind;

    /// Instance-generation options.
    type Config;
    /// The problem handed to solvers.
    type Instance;
    /// Strategy selector.
    type Mode: Copy;
    /// What a solver produces.
    type Solution;

    fn generate_instance(config: &Self::Config) -> Result<Self::Instance>;

    fn solve(instance: &Self::Instance, mode: Self::Mode) -> Result<SolverResult<Self::Solution>>;

    fn validate(instance: &Self::Instance, result: &SolverResult<Self::Solution>) -> Verdict;

    /// Headline number of a solution: flow value, distance, tour length,
    /// move count or placement count. `None` when there is nothing to
    /// measure, such as an unreachable goal.
    fn objective(solution: &Self::Solution) -> Option<u64>;

    /// `true` when [`Puzzle::validate`] accepts the result.
    fn is_valid(instance: &Self::Instance, result: &SolverResult<Self::Solution>) -> bool {
        Self::validate(instance, result).is_ok()
    }

    /// Solves and validates, turning a violation into
    /// [`EngineError::Rejected`].
    fn solve_checked(instance: &Self::Instance, mode: Self::Mode) -> Result<SolverResult<Self::Solution>> {
        let result = Self::solve(instance, mode)?;
        Self::validate(instance, &result)?;
        Ok(result)
    }
}
