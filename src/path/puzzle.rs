//! Snake & ladder rounds under the puzzle contract.

use super::config::BoardConfig;
use super::generator::generate_board;
use super::runner::{PathRunner, PathStrategy};
use super::types::{Board, PathSolution, WeightedGraph, Weighting};
use super::validate::validate_path;
use crate::engine::{Puzzle, PuzzleKind};
use crate::error::{EngineError, Result};
use crate::result::SolverResult;
use crate::validation::Verdict;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A board together with the price of a roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardRound {
    pub board: Board,
    pub weighting: Weighting,
}

impl BoardRound {
    pub fn graph(&self) -> WeightedGraph {
        self.board.to_graph(self.weighting)
    }

    /// Node of cell 1.
    pub fn start(&self) -> usize {
        Board::node(1)
    }

    /// Node of the last cell.
    pub fn goal(&self) -> usize {
        Board::node(self.board.total_cells())
    }
}

/// Fewest throws (or cheapest dice total) from cell 1 to the last cell.
///
/// Path nodes in the solution are `cell - 1`; see [`Board::cell`].
pub struct ShortestPathPuzzle;

impl Puzzle for ShortestPathPuzzle {
    const KIND: PuzzleKind = PuzzleKind::ShortestPath;

    type Config = BoardConfig;
    type Instance = BoardRound;
    type Mode = PathStrategy;
    type Solution = PathSolution;

    fn generate_instance(config: &BoardConfig) -> Result<BoardRound> {
        Ok(BoardRound {
            board: generate_board(config)?,
            weighting: config.weighting,
        })
    }

    /// # Errors
    ///
    /// [`EngineError::PreconditionViolation`] for BFS on a
    /// [`Weighting::DiceFace`] round, where edge counts are not costs.
    fn solve(instance: &BoardRound, mode: PathStrategy) -> Result<SolverResult<PathSolution>> {
        if mode == PathStrategy::Bfs && instance.weighting != Weighting::Throws {
            return Err(EngineError::precondition("bfs needs unit roll costs"));
        }
        PathRunner::run(&instance.graph(), instance.start(), instance.goal(), mode)
    }

    fn validate(instance: &BoardRound, result: &SolverResult<PathSolution>) -> Verdict {
        validate_path(
            &instance.graph(),
            instance.start(),
            instance.goal(),
            PathStrategy::Dijkstra,
            &result.solution,
        )
    }

    fn objective(solution: &PathSolution) -> Option<u64> {
        solution.distance
    }
}
