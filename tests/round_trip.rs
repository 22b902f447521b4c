//! Generate, solve and validate across many seeds for every puzzle.

use u_puzzle::engine::Puzzle;
use u_puzzle::flow::{FlowConfig, FlowStrategy, MaxFlowPuzzle};
use u_puzzle::hanoi::{HanoiConfig, HanoiPuzzle, HanoiStrategy};
use u_puzzle::path::{BoardConfig, PathStrategy, ShortestPathPuzzle, Weighting};
use u_puzzle::queens::{QueensConfig, QueensGoal, QueensMode, QueensPuzzle};
use u_puzzle::tsp::{TspConfig, TspPuzzle, TspStrategy};

const SEEDS: u64 = 100;

fn round_trip<P: Puzzle>(config: &P::Config, modes: &[P::Mode]) {
    let instance = P::generate_instance(config).unwrap();
    for &mode in modes {
        let result = P::solve(&instance, mode).unwrap();
        assert!(P::is_valid(&instance, &result), "{} rejected its own result", P::KIND);
    }
}

#[test]
fn test_max_flow_round_trip() {
    for seed in 0..SEEDS {
        let config = FlowConfig::default().with_seed(seed);
        round_trip::<MaxFlowPuzzle>(&config, &[FlowStrategy::FordFulkerson, FlowStrategy::EdmondsKarp]);

        let traffic = FlowConfig::default().with_traffic_preset().with_seed(seed);
        round_trip::<MaxFlowPuzzle>(&traffic, &[FlowStrategy::EdmondsKarp]);
    }
}

#[test]
fn test_shortest_path_round_trip() {
    for seed in 0..SEEDS {
        let size = 6 + (seed as usize % 7);
        let config = BoardConfig::default().with_board_size(size).with_seed(seed);
        round_trip::<ShortestPathPuzzle>(&config, &[PathStrategy::Bfs, PathStrategy::Dijkstra]);

        let dice = config.with_weighting(Weighting::DiceFace);
        round_trip::<ShortestPathPuzzle>(&dice, &[PathStrategy::Dijkstra]);
    }
}

#[test]
fn test_tsp_round_trip() {
    for seed in 0..SEEDS {
        let cities = 2 + (seed as usize % 7);
        let config = TspConfig::default().with_num_cities(cities).with_seed(seed);
        round_trip::<TspPuzzle>(&config, &[TspStrategy::BruteForce, TspStrategy::NearestNeighbor]);
    }
}

#[test]
fn test_hanoi_round_trip() {
    for seed in 0..SEEDS {
        let pegs = if seed % 2 == 0 { 3 } else { 4 };
        let config = HanoiConfig::default()
            .with_random_disks()
            .with_num_pegs(pegs)
            .with_seed(seed);
        round_trip::<HanoiPuzzle>(&config, &[HanoiStrategy::Recursive, HanoiStrategy::Iterative]);
    }
}

#[test]
fn test_queens_round_trip() {
    for seed in 0..SEEDS {
        let n = 1 + (seed as usize % 8);
        let goal = if seed % 3 == 0 { QueensGoal::First } else { QueensGoal::All };
        let config = QueensConfig::default().with_n(n).with_goal(goal).with_workers(2);
        round_trip::<QueensPuzzle>(&config, &[QueensMode::Sequential, QueensMode::Parallel]);
    }
}
