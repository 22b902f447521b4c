//! N-Queens searches under the puzzle contract.

use super::config::{QueensConfig, QueensGoal};
use super::runner::{QueensMode, QueensRunner};
use super::types::{QueensInstance, QueensSolution};
use super::validate::validate_placements;
use crate::engine::{Puzzle, PuzzleKind};
use crate::error::Result;
use crate::result::SolverResult;
use crate::validation::{Verdict, Violation};

/// Place `n` non-attacking queens.
pub struct QueensPuzzle;

impl Puzzle for QueensPuzzle {
    const KIND: PuzzleKind = PuzzleKind::NQueens;

    type Config = QueensConfig;
    type Instance = QueensInstance;
    type Mode = QueensMode;
    type Solution = QueensSolution;

    fn generate_instance(config: &QueensConfig) -> Result<QueensInstance> {
        QueensInstance::from_config(config)
    }

    fn solve(instance: &QueensInstance, mode: QueensMode) -> Result<SolverResult<QueensSolution>> {
        QueensRunner::run(instance, mode)
    }

    fn validate(instance: &QueensInstance, result: &SolverResult<QueensSolution>) -> Verdict {
        let solution = &result.solution;
        if instance.goal() == QueensGoal::First && solution.count() > 1 {
            return Err(Violation::Shape(format!(
                "first-only search returned {} placements",
                solution.count()
            )));
        }
        validate_placements(instance.n(), &solution.solutions)
    }

    fn objective(solution: &QueensSolution) -> Option<u64> {
        Some(solution.count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_has_92() {
        let instance = QueensPuzzle::generate_instance(&QueensConfig::default()).unwrap();
        for mode in [QueensMode::Sequential, QueensMode::Parallel] {
            let result = QueensPuzzle::solve_checked(&instance, mode).unwrap();
            assert_eq!(QueensPuzzle::objective(&result.solution), Some(92));
        }
    }
}
