//! Max-flow rounds under the puzzle contract.

use super::config::FlowConfig;
use super::generator::generate_network;
use super::runner::{FlowRunner, FlowStrategy};
use super::types::{FlowNetwork, FlowSolution};
use super::validate::validate_flow;
use crate::engine::{Puzzle, PuzzleKind};
use crate::error::Result;
use crate::result::SolverResult;
use crate::validation::Verdict;

/// Maximum flow from source to sink.
pub struct MaxFlowPuzzle;

impl Puzzle for MaxFlowPuzzle {
    const KIND: PuzzleKind = PuzzleKind::MaxFlow;

    type Config = FlowConfig;
    type Instance = FlowNetwork;
    type Mode = FlowStrategy;
    type Solution = FlowSolution;

    fn generate_instance(config: &FlowConfig) -> Result<FlowNetwork> {
        generate_network(config)
    }

    fn solve(instance: &FlowNetwork, mode: FlowStrategy) -> Result<SolverResult<FlowSolution>> {
        FlowRunner::run(instance, mode)
    }

    fn validate(instance: &FlowNetwork, result: &SolverResult<FlowSolution>) -> Verdict {
        validate_flow(instance, &result.solution)
    }

    fn objective(solution: &FlowSolution) -> Option<u64> {
        Some(solution.value)
    }
}
