//! Weighted digraph and snake & ladder board.

use crate::error::{EngineError, Result};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directed graph with signed edge weights.
///
/// Weights are signed so that a negative weight reaches the solver and is
/// rejected there as a precondition failure rather than being impossible
/// to express. Self-loops are rejected on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedGraph {
    adj: Vec<Vec<(usize, i64)>>,
}

impl WeightedGraph {
    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adj: vec![Vec::new(); num_nodes],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize, i64)]) -> Result<Self> {
        let mut graph = Self::new(num_nodes);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a directed edge.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<()> {
        let n = self.adj.len();
        if from >= n || to >= n {
            return Err(EngineError::invalid_instance(format!(
                "edge {from} -> {to} outside 0..{n}"
            )));
        }
        if from == to {
            return Err(EngineError::invalid_instance(format!("self-loop on node {from}")));
        }
        self.adj[from].push((to, weight));
        Ok(())
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Outgoing `(target, weight)` pairs of `node`.
    pub fn neighbors(&self, node: usize) -> &[(usize, i64)] {
        &self.adj[node]
    }

    /// Iterates over every edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, out)| out.iter().map(move |&(v, w)| (u, v, w)))
    }

    /// First negative edge, if any.
    pub fn negative_edge(&self) -> Option<(usize, usize, i64)> {
        self.edges().find(|&(_, _, w)| w < 0)
    }

    /// Sum of all non-negative weights, or `None` when it exceeds `u64`.
    ///
    /// Bounds every simple-path cost plus one more edge, so a graph with a
    /// total can be searched without distance overflow.
    pub fn total_weight(&self) -> Option<u64> {
        self.edges()
            .try_fold(0u64, |acc, (_, _, w)| acc.checked_add(w.max(0) as u64))
    }
}

/// How a die roll is priced when a board is turned into a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weighting {
    /// Every roll costs 1: the distance is the number of throws.
    #[default]
    Throws,
    /// A roll costs its face value.
    DiceFace,
}

/// A snake & ladder board with cells `1..=size²`.
///
/// Every special cell jumps to exactly one target. Snakes jump backward,
/// ladders forward. Neither the first nor the last cell is a jump source,
/// and no target is itself a jump source, so jumps never chain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    size: usize,
    jumps: BTreeMap<usize, usize>,
}

impl Board {
    /// Builds a board, validating every snake and ladder.
    pub fn new(size: usize, ladders: &[(usize, usize)], snakes: &[(usize, usize)]) -> Result<Self> {
        if size < 2 {
            return Err(EngineError::invalid_instance(format!(
                "board size must be at least 2, got {size}"
            )));
        }
        let total = size * size;
        let mut jumps = BTreeMap::new();

        for (kind, list, forward) in [("ladder", ladders, true), ("snake", snakes, false)] {
            for &(from, to) in list {
                if from < 2 || from >= total {
                    return Err(EngineError::invalid_instance(format!(
                        "{kind} start {from} must lie in 2..{total}"
                    )));
                }
                if to < 1 || to > total {
                    return Err(EngineError::invalid_instance(format!(
                        "{kind} end {to} outside the board"
                    )));
                }
                if forward != (to > from) || to == from {
                    return Err(EngineError::invalid_instance(format!(
                        "{kind} {from} -> {to} points the wrong way"
                    )));
                }
                if jumps.insert(from, to).is_some() {
                    return Err(EngineError::invalid_instance(format!(
                        "cell {from} starts more than one jump"
                    )));
                }
            }
        }

        if let Some((from, to)) = jumps.iter().find(|(_, to)| jumps.contains_key(*to)) {
            return Err(EngineError::invalid_instance(format!(
                "jump {from} -> {to} lands on another jump"
            )));
        }

        Ok(Self { size, jumps })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, `size²`.
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Ladders as `(bottom, top)`.
    pub fn ladders(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.jumps.iter().filter(|(f, t)| t > f).map(|(&f, &t)| (f, t))
    }

    /// Snakes as `(head, tail)`.
    pub fn snakes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.jumps.iter().filter(|(f, t)| t < f).map(|(&f, &t)| (f, t))
    }

    /// Cell reached after rolling `dice` from `cell`, or `None` when the
    /// roll overshoots the last cell and the token stays put.
    pub fn advance(&self, cell: usize, dice: usize) -> Option<usize> {
        let landed = cell + dice;
        if landed > self.total_cells() {
            return None;
        }
        Some(self.jumps.get(&landed).copied().unwrap_or(landed))
    }

    /// Graph node for a cell (`cell - 1`).
    pub fn node(cell: usize) -> usize {
        cell - 1
    }

    /// Cell for a graph node (`node + 1`).
    pub fn cell(node: usize) -> usize {
        node + 1
    }

    /// One edge per roll `1..=6` from every cell before the last, skipping
    /// rolls that overshoot or slide back onto the same cell.
    pub fn to_graph(&self, weighting: Weighting) -> WeightedGraph {
        let total = self.total_cells();
        let mut graph = WeightedGraph::new(total);
        for cell in 1..total {
            for dice in 1..=6usize {
                let Some(dest) = self.advance(cell, dice) else {
                    continue;
                };
                if dest == cell {
                    continue;
                }
                let weight = match weighting {
                    Weighting::Throws => 1,
                    Weighting::DiceFace => dice as i64,
                };
                graph.adj[Self::node(cell)].push((Self::node(dest), weight));
            }
        }
        graph
    }
}

/// Shortest distance and one route achieving it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathSolution {
    /// `None` when the goal cannot be reached.
    pub distance: Option<u64>,

    /// Nodes from start to goal inclusive; empty when unreachable.
    pub path: Vec<usize>,
}

impl PathSolution {
    pub fn unreachable() -> Self {
        Self {
            distance: None,
            path: Vec::new(),
        }
    }
}
