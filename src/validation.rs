//! Independent solution checking.
//!
//! Every puzzle family exposes a `validate_*` function that re-derives
//! correctness without consulting the solver that produced the result.
//! The outcome is a [`Verdict`]: `Ok(())` when every rule holds, or the
//! first [`Violation`] encountered.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The first broken rule found while re-checking a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Violation {
    // ---- shape ----
    #[error("solution shape mismatch: {0}")]
    Shape(String),

    // ---- flow ----
    #[error("edge {edge} carries {flow} over capacity {capacity}")]
    CapacityExceeded { edge: usize, flow: u64, capacity: u64 },

    #[error("flow not conserved at node {node}: in {inflow}, out {outflow}")]
    ConservationBroken { node: usize, inflow: u64, outflow: u64 },

    #[error("reported flow {reported} but net source outflow is {actual}")]
    FlowValueMismatch { reported: u64, actual: u64 },

    #[error("an augmenting path still reaches the sink")]
    AugmentingPathRemains,

    #[error("cut capacity {cut} differs from flow value {flow}")]
    CutMismatch { cut: u64, flow: u64 },

    // ---- shortest path ----
    #[error("no edge from {from} to {to} on the reported path")]
    PathBroken { from: usize, to: usize },

    #[error("path does not run from start to goal")]
    PathEndpoints,

    #[error("reported distance {reported} but the path costs {actual}")]
    DistanceMismatch { reported: u64, actual: u64 },

    #[error("reported distance {reported:?} but the shortest is {expected:?}")]
    NotShortest { reported: Option<u64>, expected: Option<u64> },

    // ---- tsp ----
    #[error("tour must start and end at city {0}")]
    TourEndpoints(usize),

    #[error("city {0} is missing from or repeated in the tour")]
    CityCoverage(usize),

    // ---- hanoi ----
    #[error("move {step}: peg {peg} does not exist")]
    NoSuchPeg { step: usize, peg: usize },

    #[error("move {step}: peg {peg} is empty")]
    EmptyPeg { step: usize, peg: usize },

    #[error("move {step}: disk {disk} placed on smaller disk {onto}")]
    LargerOnSmaller { step: usize, disk: u32, onto: u32 },

    #[error("tower not fully moved to the target peg")]
    NotSolved,

    #[error("expected {expected} moves for an exact result, got {actual}")]
    MoveCount { expected: u64, actual: u64 },

    // ---- queens ----
    #[error("queens in columns {a} and {b} attack each other")]
    QueensAttack { a: usize, b: usize },

    #[error("placement {0} reported more than once")]
    DuplicateSolution(usize),
}

/// Outcome of a validation pass.
pub type Verdict = Result<(), Violation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let v = Violation::LargerOnSmaller {
            step: 4,
            disk: 3,
            onto: 1,
        };
        assert_eq!(v.to_string(), "move 4: disk 3 placed on smaller disk 1");
    }
}
