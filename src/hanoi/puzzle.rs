//! Tower of Hanoi rounds under the puzzle contract.

use super::config::HanoiConfig;
use super::generator::generate_tower;
use super::runner::{HanoiRunner, HanoiStrategy};
use super::types::{HanoiInstance, Move};
use super::validate::validate_moves;
use crate::engine::{Puzzle, PuzzleKind};
use crate::error::Result;
use crate::result::SolverResult;
use crate::validation::Verdict;

/// Move the whole tower from peg `A` to the last peg.
pub struct HanoiPuzzle;

impl Puzzle for HanoiPuzzle {
    const KIND: PuzzleKind = PuzzleKind::Hanoi;

    type Config = HanoiConfig;
    type Instance = HanoiInstance;
    type Mode = HanoiStrategy;
    type Solution = Vec<Move>;

    fn generate_instance(config: &HanoiConfig) -> Result<HanoiInstance> {
        generate_tower(config)
    }

    fn solve(instance: &HanoiInstance, mode: HanoiStrategy) -> Result<SolverResult<Vec<Move>>> {
        HanoiRunner::run(instance, mode)
    }

    fn validate(instance: &HanoiInstance, result: &SolverResult<Vec<Move>>) -> Verdict {
        validate_moves(instance, &result.solution, result.optimality)
    }

    fn objective(solution: &Vec<Move>) -> Option<u64> {
        Some(solution.len() as u64)
    }
}
