//! Property tests over generated instances.

use proptest::prelude::*;
use u_puzzle::flow::{generate_network, min_cut, FlowConfig, FlowRunner, FlowStrategy};
use u_puzzle::hanoi::{HanoiInstance, HanoiRunner, HanoiState, HanoiStrategy};
use u_puzzle::path::{generate_board, Board, BoardConfig, PathRunner, PathStrategy, Weighting};
use u_puzzle::queens::{QueensInstance, QueensMode, QueensRunner};
use u_puzzle::tsp::{generate_tsp, TspConfig, TspRunner, TspStrategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_max_flow_equals_min_cut(
        seed in any::<u64>(),
        nodes in 2usize..=24,
        density in 0.0f64..=1.0,
    ) {
        let config = FlowConfig::default()
            .with_num_nodes(nodes)
            .with_edge_density(density)
            .with_seed(seed);
        let network = generate_network(&config).unwrap();

        let ff = FlowRunner::run(&network, FlowStrategy::FordFulkerson).unwrap().solution;
        let ek = FlowRunner::run(&network, FlowStrategy::EdmondsKarp).unwrap().solution;
        prop_assert_eq!(ff.value, ek.value);
        prop_assert_eq!(min_cut(&network, &ff).capacity, ff.value);
        prop_assert_eq!(min_cut(&network, &ek).capacity, ek.value);
    }

    #[test]
    fn test_bfs_matches_dijkstra_on_throw_boards(seed in any::<u64>(), size in 6usize..=12) {
        let board = generate_board(&BoardConfig::default().with_board_size(size).with_seed(seed)).unwrap();
        let graph = board.to_graph(Weighting::Throws);
        let goal = Board::node(board.total_cells());

        let bfs = PathRunner::run(&graph, 0, goal, PathStrategy::Bfs).unwrap().solution;
        let dij = PathRunner::run(&graph, 0, goal, PathStrategy::Dijkstra).unwrap().solution;
        prop_assert_eq!(bfs.distance, dij.distance);
    }

    #[test]
    fn test_brute_force_never_worse(seed in any::<u64>(), cities in 2usize..=8) {
        let instance = generate_tsp(&TspConfig::default().with_num_cities(cities).with_seed(seed)).unwrap();
        let exact = TspRunner::run(&instance.matrix, instance.start_city, TspStrategy::BruteForce).unwrap();
        let greedy = TspRunner::run(&instance.matrix, instance.start_city, TspStrategy::NearestNeighbor).unwrap();
        prop_assert!(exact.solution.distance <= greedy.solution.distance);
    }

    #[test]
    fn test_hanoi_three_pegs_minimal_and_legal(disks in 1u32..=15) {
        let instance = HanoiInstance::new(disks, 3).unwrap();
        let moves = HanoiRunner::run(&instance, HanoiStrategy::Iterative).unwrap().solution;
        prop_assert_eq!(moves.len() as u64, (1u64 << disks) - 1);

        let mut state = HanoiState::initial(disks, 3);
        for (step, &mv) in moves.iter().enumerate() {
            prop_assert!(state.apply(step, mv).is_ok());
            prop_assert!(state.is_well_formed());
        }
        prop_assert!(state.is_solved(2, disks));
    }

    #[test]
    fn test_queens_modes_agree(n in 1usize..=9) {
        let instance = QueensInstance::new(n).unwrap();
        let seq = QueensRunner::run(&instance, QueensMode::Sequential).unwrap().solution;
        let par = QueensRunner::run(&instance, QueensMode::Parallel).unwrap().solution;
        prop_assert_eq!(seq.solutions, par.solutions);
    }
}
