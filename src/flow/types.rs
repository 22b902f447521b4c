//! Flow network data model.

use crate::error::{EngineError, Result};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directed edge with an integer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub capacity: u64,
}

/// A directed capacitated graph with designated source and sink.
///
/// Nodes are `0..num_nodes`. Construction rejects self-loops,
/// out-of-range endpoints, `source == sink` and capacities whose sum
/// exceeds `u64`, so every value of this type is a valid flow problem and
/// no flow, cut or conservation sum over it can overflow. Parallel edges
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowNetwork {
    num_nodes: usize,
    edges: Vec<FlowEdge>,
    source: usize,
    sink: usize,
    labels: Option<Vec<String>>,
}

/// Road layout of the traffic round: A is the entry, T the exit.
const TRAFFIC_LABELS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "T"];
const TRAFFIC_ROADS: [(usize, usize); 13] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 4),
    (1, 5),
    (2, 4),
    (2, 5),
    (3, 5),
    (4, 6),
    (4, 7),
    (5, 7),
    (6, 8),
    (7, 8),
];

impl FlowNetwork {
    /// Builds a network, validating every edge.
    pub fn new(num_nodes: usize, edges: Vec<FlowEdge>, source: usize, sink: usize) -> Result<Self> {
        if num_nodes < 2 {
            return Err(EngineError::invalid_instance(format!(
                "flow network needs at least 2 nodes, got {num_nodes}"
            )));
        }
        if source >= num_nodes || sink >= num_nodes {
            return Err(EngineError::invalid_instance(format!(
                "source {source} or sink {sink} outside 0..{num_nodes}"
            )));
        }
        if source == sink {
            return Err(EngineError::invalid_instance("source and sink must differ"));
        }
        for (i, e) in edges.iter().enumerate() {
            if e.from >= num_nodes || e.to >= num_nodes {
                return Err(EngineError::invalid_instance(format!(
                    "edge {i} ({} -> {}) references a missing node",
                    e.from, e.to
                )));
            }
            if e.from == e.to {
                return Err(EngineError::invalid_instance(format!(
                    "edge {i} is a self-loop on node {}",
                    e.from
                )));
            }
        }
        if edges
            .iter()
            .try_fold(0u64, |acc, e| acc.checked_add(e.capacity))
            .is_none()
        {
            return Err(EngineError::invalid_instance(
                "total edge capacity exceeds u64",
            ));
        }
        Ok(Self {
            num_nodes,
            edges,
            source,
            sink,
            labels: None,
        })
    }

    /// Builds a network from `(from, to, capacity)` triples.
    ///
    /// Capacities are signed so that callers holding untrusted input get
    /// an [`EngineError::InvalidInstance`] instead of a wrapped value.
    pub fn from_triples(
        num_nodes: usize,
        triples: &[(usize, usize, i64)],
        source: usize,
        sink: usize,
    ) -> Result<Self> {
        let mut edges = Vec::with_capacity(triples.len());
        for (i, &(from, to, capacity)) in triples.iter().enumerate() {
            let capacity = u64::try_from(capacity).map_err(|_| {
                EngineError::invalid_instance(format!("edge {i} has negative capacity {capacity}"))
            })?;
            edges.push(FlowEdge { from, to, capacity });
        }
        Self::new(num_nodes, edges, source, sink)
    }

    /// Attaches display labels, one per node.
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.num_nodes {
            return Err(EngineError::invalid_instance(format!(
                "{} labels for {} nodes",
                labels.len(),
                self.num_nodes
            )));
        }
        self.labels = Some(labels);
        Ok(self)
    }

    /// The fixed nine-junction road network with random capacities in
    /// `5..=15`, entry `A` and exit `T`.
    pub fn traffic_preset<R: Rng>(rng: &mut R) -> Self {
        let edges = TRAFFIC_ROADS
            .iter()
            .map(|&(from, to)| FlowEdge {
                from,
                to,
                capacity: rng.random_range(5..=15),
            })
            .collect();
        Self {
            num_nodes: TRAFFIC_LABELS.len(),
            edges,
            source: 0,
            sink: TRAFFIC_LABELS.len() - 1,
            labels: Some(TRAFFIC_LABELS.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Display name of a node: its label, or its index.
    pub fn label(&self, node: usize) -> String {
        match &self.labels {
            Some(labels) => labels[node].clone(),
            None => node.to_string(),
        }
    }

    /// Sum of all edge capacities leaving the source.
    pub fn source_capacity(&self) -> u64 {
        self.edges
            .iter()
            .filter(|e| e.from == self.source)
            .map(|e| e.capacity)
            .sum()
    }
}

/// Maximum flow value and the per-edge assignment that achieves it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowSolution {
    /// Total flow leaving the source.
    pub value: u64,

    /// Flow on each edge, parallel to [`FlowNetwork::edges`].
    pub edge_flows: Vec<u64>,
}

/// An s-t cut derived from a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinCut {
    /// `true` for nodes reachable from the source in the residual graph.
    pub source_side: Vec<bool>,

    /// Indices of edges crossing from the source side to the sink side.
    pub edges: Vec<usize>,

    /// Total capacity of the crossing edges.
    pub capacity: u64,
}
