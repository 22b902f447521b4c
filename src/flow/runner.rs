//! Augmenting-path max-flow solvers.

use super::types::{FlowNetwork, FlowSolution};
use crate::error::Result;
use crate::instrument::{measure, StepCounter};
use crate::result::{Optimality, SolverResult};
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How augmenting paths are searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlowStrategy {
    /// Plain Ford-Fulkerson: any augmenting path, found by depth-first search.
    FordFulkerson,
    /// Edmonds-Karp: shortest augmenting path by edge count, found by
    /// breadth-first search.
    EdmondsKarp,
}

impl FlowStrategy {
    pub fn name(self) -> &'static str {
        match self {
            FlowStrategy::FordFulkerson => "ford-fulkerson",
            FlowStrategy::EdmondsKarp => "edmonds-karp",
        }
    }
}

/// Residual graph with paired arcs.
///
/// Edge `i` owns arc `2i` (forward, starts at its capacity) and arc
/// `2i + 1` (reverse, starts at 0). Pushing `f` along an arc lowers it by
/// `f` and raises its partner by `f`, so for every edge
/// `residual(u,v) = capacity(u,v) - flow(u,v) + flow(v,u)` holds and no
/// residual ever goes negative.
struct Residual {
    head: Vec<usize>,
    cap: Vec<u64>,
    adj: Vec<Vec<usize>>,
}

impl Residual {
    fn build(network: &FlowNetwork) -> Self {
        let m = network.edges().len();
        let mut head = Vec::with_capacity(2 * m);
        let mut cap = Vec::with_capacity(2 * m);
        let mut adj = vec![Vec::new(); network.num_nodes()];

        for (i, e) in network.edges().iter().enumerate() {
            head.push(e.to);
            cap.push(e.capacity);
            adj[e.from].push(2 * i);

            head.push(e.from);
            cap.push(0);
            adj[e.to].push(2 * i + 1);
        }

        Self { head, cap, adj }
    }

    /// Shortest augmenting path; returns the arc used to enter each node.
    fn bfs_path(&self, source: usize, sink: usize) -> Option<Vec<Option<usize>>> {
        let mut parent: Vec<Option<usize>> = vec![None; self.adj.len()];
        let mut visited = vec![false; self.adj.len()];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for &arc in &self.adj[u] {
                let v = self.head[arc];
                if !visited[v] && self.cap[arc] > 0 {
                    visited[v] = true;
                    parent[v] = Some(arc);
                    if v == sink {
                        return Some(parent);
                    }
                    queue.push_back(v);
                }
            }
        }
        None
    }

    /// Any augmenting path, by iterative depth-first search.
    fn dfs_path(&self, source: usize, sink: usize) -> Option<Vec<Option<usize>>> {
        let mut parent: Vec<Option<usize>> = vec![None; self.adj.len()];
        let mut visited = vec![false; self.adj.len()];
        let mut stack = vec![source];
        visited[source] = true;

        while let Some(u) = stack.pop() {
            if u == sink {
                return Some(parent);
            }
            for &arc in self.adj[u].iter().rev() {
                let v = self.head[arc];
                if !visited[v] && self.cap[arc] > 0 {
                    visited[v] = true;
                    parent[v] = Some(arc);
                    stack.push(v);
                }
            }
        }
        None
    }

    /// Pushes the bottleneck amount along the parent chain; returns it.
    fn augment(&mut self, parent: &[Option<usize>], source: usize, sink: usize) -> u64 {
        let mut bottleneck = u64::MAX;
        let mut v = sink;
        while v != source {
            let Some(arc) = parent[v] else { break };
            bottleneck = bottleneck.min(self.cap[arc]);
            v = self.head[arc ^ 1];
        }

        let mut v = sink;
        while v != source {
            let Some(arc) = parent[v] else { break };
            self.cap[arc] -= bottleneck;
            self.cap[arc ^ 1] += bottleneck;
            v = self.head[arc ^ 1];
        }
        bottleneck
    }
}

/// Executes max-flow computations.
pub struct FlowRunner;

impl FlowRunner {
    /// Computes a maximum flow under instrumentation.
    ///
    /// Both strategies are exact. The step count is the number of
    /// augmenting paths pushed.
    pub fn run(network: &FlowNetwork, strategy: FlowStrategy) -> Result<SolverResult<FlowSolution>> {
        measure(strategy.name(), Optimality::Exact, |steps| {
            Ok(Self::max_flow(network, strategy, steps))
        })
    }

    /// Repeats augmentation until the sink is cut off from the source.
    ///
    /// Capacities are integers and every augmentation adds at least one
    /// unit, so the loop ends after at most `source_capacity` rounds.
    /// A sink unreachable from the source yields a zero flow.
    pub fn max_flow(network: &FlowNetwork, strategy: FlowStrategy, steps: &mut StepCounter) -> FlowSolution {
        let (source, sink) = (network.source(), network.sink());
        let mut residual = Residual::build(network);
        let mut value = 0u64;

        loop {
            let parent = match strategy {
                FlowStrategy::FordFulkerson => residual.dfs_path(source, sink),
                FlowStrategy::EdmondsKarp => residual.bfs_path(source, sink),
            };
            let Some(parent) = parent else { break };

            let pushed = residual.augment(&parent, source, sink);
            steps.tick();
            value += pushed;
            log::trace!("{}: pushed {pushed}, total {value}", strategy.name());
        }

        let edge_flows = (0..network.edges().len())
            .map(|i| residual.cap[2 * i + 1])
            .collect();

        FlowSolution { value, edge_flows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::types::FlowEdge;
    use crate::flow::validate::validate_flow;

    fn four_node() -> FlowNetwork {
        FlowNetwork::from_triples(4, &[(0, 1, 3), (1, 3, 2), (0, 2, 2), (2, 3, 3)], 0, 3).unwrap()
    }

    #[test]
    fn test_four_node_scenario() {
        for strategy in [FlowStrategy::FordFulkerson, FlowStrategy::EdmondsKarp] {
            let result = FlowRunner::run(&four_node(), strategy).unwrap();
            assert_eq!(result.solution.value, 4, "{strategy:?}");
            assert_eq!(result.optimality, Optimality::Exact);
            assert!(result.steps >= 2);
        }
    }

    #[test]
    fn test_disconnected_sink_is_zero() {
        let net = FlowNetwork::from_triples(4, &[(0, 1, 5), (2, 3, 5)], 0, 3).unwrap();
        let result = FlowRunner::run(&net, FlowStrategy::EdmondsKarp).unwrap();
        assert_eq!(result.solution.value, 0);
        assert_eq!(result.solution.edge_flows, vec![0, 0]);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_requires_flow_cancellation() {
        // Classic diamond with a cross edge; DFS may route through 1->2
        // first and must later undo it through the reverse arc.
        let net = FlowNetwork::from_triples(
            4,
            &[(0, 1, 10), (0, 2, 10), (1, 2, 1), (1, 3, 10), (2, 3, 10)],
            0,
            3,
        )
        .unwrap();
        for strategy in [FlowStrategy::FordFulkerson, FlowStrategy::EdmondsKarp] {
            let result = FlowRunner::run(&net, strategy).unwrap();
            assert_eq!(result.solution.value, 20, "{strategy:?}");
        }
    }

    #[test]
    fn test_parallel_edges_add_up() {
        let net = FlowNetwork::from_triples(2, &[(0, 1, 3), (0, 1, 4)], 0, 1).unwrap();
        let result = FlowRunner::run(&net, FlowStrategy::FordFulkerson).unwrap();
        assert_eq!(result.solution.value, 7);
        assert_eq!(result.solution.edge_flows, vec![3, 4]);
    }

    #[test]
    fn test_capacities_near_u64_limit() {
        let half = u64::MAX / 2;
        let edges = vec![
            FlowEdge { from: 0, to: 1, capacity: half },
            FlowEdge { from: 0, to: 1, capacity: half },
        ];
        let net = FlowNetwork::new(2, edges, 0, 1).unwrap();
        for strategy in [FlowStrategy::FordFulkerson, FlowStrategy::EdmondsKarp] {
            let result = FlowRunner::run(&net, strategy).unwrap();
            assert_eq!(result.solution.value, 2 * half, "{strategy:?}");
            assert!(validate_flow(&net, &result.solution).is_ok());
        }
    }

    #[test]
    fn test_zero_capacity_edges_carry_nothing() {
        let net = FlowNetwork::from_triples(3, &[(0, 1, 0), (1, 2, 9)], 0, 2).unwrap();
        let result = FlowRunner::run(&net, FlowStrategy::EdmondsKarp).unwrap();
        assert_eq!(result.solution.value, 0);
    }

    #[test]
    fn test_edge_flows_respect_capacity() {
        let net = four_node();
        let sol = FlowRunner::run(&net, FlowStrategy::FordFulkerson).unwrap().solution;
        for (edge, flow) in net.edges().iter().zip(&sol.edge_flows) {
            assert!(*flow <= edge.capacity);
        }
    }
}
