//! Breadth-first and Dijkstra shortest-path solvers.

use super::types::{PathSolution, WeightedGraph};
use crate::error::{EngineError, Result};
use crate::instrument::{measure, StepCounter};
use crate::result::{Optimality, SolverResult};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest-path strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathStrategy {
    /// Level-by-level search; every edge counts as 1 whatever its weight.
    Bfs,
    /// Priority-frontier search over edge weights. Weights must be
    /// non-negative.
    Dijkstra,
}

impl PathStrategy {
    pub fn name(self) -> &'static str {
        match self {
            PathStrategy::Bfs => "bfs",
            PathStrategy::Dijkstra => "dijkstra",
        }
    }
}

/// Executes shortest-path searches.
pub struct PathRunner;

impl PathRunner {
    /// Finds the shortest route from `start` to `goal` under instrumentation.
    ///
    /// Step count is the number of nodes dequeued (BFS) or settled
    /// (Dijkstra). An unreachable goal is a result with `distance: None`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInstance`] when `start` or `goal` is not a node.
    /// - [`EngineError::PreconditionViolation`] when Dijkstra is given a
    ///   negative edge; no search is attempted.
    pub fn run(
        graph: &WeightedGraph,
        start: usize,
        goal: usize,
        strategy: PathStrategy,
    ) -> Result<SolverResult<PathSolution>> {
        let n = graph.num_nodes();
        if start >= n || goal >= n {
            return Err(EngineError::invalid_instance(format!(
                "start {start} or goal {goal} outside 0..{n}"
            )));
        }
        if strategy == PathStrategy::Dijkstra {
            if let Some((u, v, w)) = graph.negative_edge() {
                return Err(EngineError::precondition(format!(
                    "dijkstra requires non-negative weights, edge {u} -> {v} has {w}"
                )));
            }
            if graph.total_weight().is_none() {
                return Err(EngineError::precondition(
                    "dijkstra requires the total edge weight to fit in u64",
                ));
            }
        }

        measure(strategy.name(), Optimality::Exact, |steps| {
            Ok(match strategy {
                PathStrategy::Bfs => bfs(graph, start, goal, steps),
                PathStrategy::Dijkstra => dijkstra(graph, start, goal, steps),
            })
        })
    }
}

fn rebuild(parent: &[Option<usize>], start: usize, goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut node = goal;
    while node != start {
        match parent[node] {
            Some(p) => {
                path.push(p);
                node = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Returns the level at which `goal` is dequeued.
fn bfs(graph: &WeightedGraph, start: usize, goal: usize, steps: &mut StepCounter) -> PathSolution {
    let n = graph.num_nodes();
    let mut level: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::from([start]);
    level[start] = Some(0);

    while let Some(u) = queue.pop_front() {
        steps.tick();
        let Some(d) = level[u] else { continue };
        if u == goal {
            return PathSolution {
                distance: Some(d),
                path: rebuild(&parent, start, goal),
            };
        }
        for &(v, _) in graph.neighbors(u) {
            if level[v].is_none() {
                level[v] = Some(d + 1);
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }
    PathSolution::unreachable()
}

/// Finalizes nodes in non-decreasing distance order; stops when `goal`
/// is settled.
fn dijkstra(graph: &WeightedGraph, start: usize, goal: usize, steps: &mut StepCounter) -> PathSolution {
    let n = graph.num_nodes();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();
    dist[start] = Some(0);
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        steps.tick();

        if u == goal {
            return PathSolution {
                distance: Some(d),
                path: rebuild(&parent, start, goal),
            };
        }

        for &(v, w) in graph.neighbors(u) {
            // Non-negative weights were checked at entry.
            let candidate = d + w as u64;
            if dist[v].is_none_or(|old| candidate < old) {
                dist[v] = Some(candidate);
                parent[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }
    PathSolution::unreachable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Board, Weighting};

    #[test]
    fn test_bfs_counts_edges() {
        let g = WeightedGraph::from_edges(4, &[(0, 1, 5), (1, 3, 5), (0, 2, 1), (2, 1, 1)]).unwrap();
        let r = PathRunner::run(&g, 0, 3, PathStrategy::Bfs).unwrap();
        assert_eq!(r.solution.distance, Some(2));
        assert_eq!(r.solution.path, vec![0, 1, 3]);
    }

    #[test]
    fn test_dijkstra_uses_weights() {
        let g = WeightedGraph::from_edges(4, &[(0, 1, 5), (1, 3, 5), (0, 2, 1), (2, 1, 1)]).unwrap();
        let r = PathRunner::run(&g, 0, 3, PathStrategy::Dijkstra).unwrap();
        assert_eq!(r.solution.distance, Some(7));
        assert_eq!(r.solution.path, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_unit_weights_agree() {
        let board = Board::new(8, &[(3, 22), (17, 50)], &[(45, 12), (60, 33)]).unwrap();
        let g = board.to_graph(Weighting::Throws);
        let goal = board.total_cells() - 1;
        let bfs = PathRunner::run(&g, 0, goal, PathStrategy::Bfs).unwrap();
        let dij = PathRunner::run(&g, 0, goal, PathStrategy::Dijkstra).unwrap();
        assert_eq!(bfs.solution.distance, dij.solution.distance);
    }

    #[test]
    fn test_plain_board_throws() {
        // 36 cells, no jumps: 35 squares to cover, at most 6 per throw.
        let board = Board::new(6, &[], &[]).unwrap();
        let g = board.to_graph(Weighting::Throws);
        let r = PathRunner::run(&g, 0, 35, PathStrategy::Bfs).unwrap();
        assert_eq!(r.solution.distance, Some(6));
    }

    #[test]
    fn test_ladder_shortcut() {
        let board = Board::new(6, &[(2, 35)], &[]).unwrap();
        let g = board.to_graph(Weighting::Throws);
        let r = PathRunner::run(&g, 0, 35, PathStrategy::Dijkstra).unwrap();
        assert_eq!(r.solution.distance, Some(2));
    }

    #[test]
    fn test_unreachable_goal() {
        let g = WeightedGraph::from_edges(3, &[(0, 1, 1)]).unwrap();
        for strategy in [PathStrategy::Bfs, PathStrategy::Dijkstra] {
            let r = PathRunner::run(&g, 0, 2, strategy).unwrap();
            assert_eq!(r.solution, PathSolution::unreachable());
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let g = WeightedGraph::from_edges(2, &[(0, 1, 1)]).unwrap();
        let r = PathRunner::run(&g, 1, 1, PathStrategy::Dijkstra).unwrap();
        assert_eq!(r.solution.distance, Some(0));
        assert_eq!(r.solution.path, vec![1]);
    }

    #[test]
    fn test_negative_weight_fails_fast() {
        let g = WeightedGraph::from_edges(3, &[(0, 1, 2), (1, 2, -1)]).unwrap();
        let err = PathRunner::run(&g, 0, 2, PathStrategy::Dijkstra).unwrap_err();
        assert!(matches!(err, EngineError::PreconditionViolation(_)));

        // BFS ignores weights entirely.
        let r = PathRunner::run(&g, 0, 2, PathStrategy::Bfs).unwrap();
        assert_eq!(r.solution.distance, Some(2));
    }

    #[test]
    fn test_overflowing_weights_fail_fast() {
        let g = WeightedGraph::from_edges(4, &[(0, 1, i64::MAX), (1, 2, i64::MAX), (2, 3, i64::MAX)]).unwrap();
        let err = PathRunner::run(&g, 0, 3, PathStrategy::Dijkstra).unwrap_err();
        assert!(matches!(err, EngineError::PreconditionViolation(_)));

        let r = PathRunner::run(&g, 0, 3, PathStrategy::Bfs).unwrap();
        assert_eq!(r.solution.distance, Some(3));
    }

    #[test]
    fn test_large_weights_within_range() {
        let big = i64::MAX / 2;
        let g = WeightedGraph::from_edges(3, &[(0, 1, big), (1, 2, big)]).unwrap();
        let r = PathRunner::run(&g, 0, 2, PathStrategy::Dijkstra).unwrap();
        assert_eq!(r.solution.distance, Some(2 * big as u64));
    }

    #[test]
    fn test_out_of_range_endpoints() {
        let g = WeightedGraph::new(2);
        let err = PathRunner::run(&g, 0, 5, PathStrategy::Bfs).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInstance(_)));
    }
}
