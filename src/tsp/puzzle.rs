//! Travelling-salesman rounds under the puzzle contract.

use super::config::TspConfig;
use super::generator::generate_tsp;
use super::runner::{TspRunner, TspStrategy};
use super::types::{TspInstance, TspSolution};
use super::validate::validate_tour;
use crate::engine::{Puzzle, PuzzleKind};
use crate::error::Result;
use crate::result::SolverResult;
use crate::validation::Verdict;

/// Shortest closed tour through every city.
pub struct TspPuzzle;

impl Puzzle for TspPuzzle {
    const KIND: PuzzleKind = PuzzleKind::Tsp;

    type Config = TspConfig;
    type Instance = TspInstance;
    type Mode = TspStrategy;
    type Solution = TspSolution;

    fn generate_instance(config: &TspConfig) -> Result<TspInstance> {
        generate_tsp(config)
    }

    fn solve(instance: &TspInstance, mode: TspStrategy) -> Result<SolverResult<TspSolution>> {
        TspRunner::run(&instance.matrix, instance.start_city, mode)
    }

    fn validate(instance: &TspInstance, result: &SolverResult<TspSolution>) -> Verdict {
        validate_tour(&instance.matrix, instance.start_city, &result.solution)
    }

    fn objective(solution: &TspSolution) -> Option<u64> {
        Some(solution.distance)
    }
}
