//! Shortest-path checks.

use super::runner::PathStrategy;
use super::types::{PathSolution, WeightedGraph};
use crate::validation::{Verdict, Violation};

/// Cost of an edge under the metric a strategy optimizes.
fn edge_cost(strategy: PathStrategy, weight: i64) -> u64 {
    match strategy {
        PathStrategy::Bfs => 1,
        PathStrategy::Dijkstra => weight.max(0) as u64,
    }
}

/// Label-correcting relaxation to a fixpoint.
///
/// Sweeps every edge until no distance improves; at most `num_nodes`
/// sweeps for non-negative costs.
pub fn reference_distances(graph: &WeightedGraph, start: usize, strategy: PathStrategy) -> Vec<Option<u64>> {
    let n = graph.num_nodes();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    if start >= n {
        return dist;
    }
    dist[start] = Some(0);

    for _ in 0..n {
        let mut changed = false;
        for (u, v, w) in graph.edges() {
            let Some(du) = dist[u] else { continue };
            // A sum past u64 can never be the shortest.
            let Some(candidate) = du.checked_add(edge_cost(strategy, w)) else {
                continue;
            };
            if dist[v].is_none_or(|dv| candidate < dv) {
                dist[v] = Some(candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Checks that the reported route is a real walk from `start` to `goal`,
/// that its cost matches the reported distance, and that no cheaper route
/// exists.
pub fn validate_path(
    graph: &WeightedGraph,
    start: usize,
    goal: usize,
    strategy: PathStrategy,
    solution: &PathSolution,
) -> Verdict {
    let expected = reference_distances(graph, start, strategy)
        .get(goal)
        .copied()
        .flatten();

    let Some(reported) = solution.distance else {
        return match expected {
            None => Ok(()),
            Some(_) => Err(Violation::NotShortest {
                reported: None,
                expected,
            }),
        };
    };

    if solution.path.first() != Some(&start) || solution.path.last() != Some(&goal) {
        return Err(Violation::PathEndpoints);
    }

    let mut actual = 0u64;
    for pair in solution.path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let cheapest = graph
            .neighbors(from)
            .iter()
            .filter(|&&(v, _)| v == to)
            .map(|&(_, w)| edge_cost(strategy, w))
            .min();
        let Some(cost) = cheapest else {
            return Err(Violation::PathBroken { from, to });
        };
        actual = actual.saturating_add(cost);
    }

    if actual != reported {
        return Err(Violation::DistanceMismatch { reported, actual });
    }
    if expected != Some(reported) {
        return Err(Violation::NotShortest {
            reported: Some(reported),
            expected,
        });
    }
    Ok(())
}
