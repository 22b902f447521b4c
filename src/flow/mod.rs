//! Maximum flow.
//!
//! Ford-Fulkerson (depth-first augmenting paths) and Edmonds-Karp
//! (breadth-first, shortest augmenting paths) over a residual graph with
//! paired forward/reverse arcs. Both return the flow value together with
//! the per-edge assignment; [`validate_flow`] certifies maximality through
//! the max-flow min-cut theorem.
//!
//! # References
//!
//! - Ford & Fulkerson (1956), "Maximal Flow Through a Network"
//! - Edmonds & Karp (1972), "Theoretical Improvements in Algorithmic
//!   Efficiency for Network Flow Problems"

mod config;
mod generator;
mod puzzle;
mod runner;
mod types;
mod validate;

pub use config::{FlowConfig, MAX_FLOW_NODES};
pub use generator::generate_network;
pub use puzzle::MaxFlowPuzzle;
pub use runner::{FlowRunner, FlowStrategy};
pub use types::{FlowEdge, FlowNetwork, FlowSolution, MinCut};
pub use validate::{min_cut, validate_flow};
