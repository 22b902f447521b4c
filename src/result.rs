//! Solver output shared by every puzzle family.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a solution carries an optimality guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Optimality {
    /// Produced by an exact algorithm; the objective is optimal.
    Exact,
    /// Produced by a heuristic; no optimality claim is made.
    Heuristic,
}

impl Optimality {
    pub fn is_exact(self) -> bool {
        matches!(self, Optimality::Exact)
    }
}

/// Result of one instrumented solver invocation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverResult<S> {
    /// The produced solution (flow, path, tour, move list or placements).
    pub solution: S,

    /// Wall-clock time spent inside the solver.
    pub elapsed: Duration,

    /// Solver-specific work counter (augmentations, nodes explored,
    /// permutations tried, recursive calls made).
    pub steps: u64,

    /// Exact vs heuristic tag.
    pub optimality: Optimality,
}

impl<S> SolverResult<S> {
    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Maps the solution while keeping the measurements.
    pub fn map<T, F: FnOnce(S) -> T>(self, f: F) -> SolverResult<T> {
        SolverResult {
            solution: f(self.solution),
            elapsed: self.elapsed,
            steps: self.steps,
            optimality: self.optimality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms() {
        let result = SolverResult {
            solution: (),
            elapsed: Duration::from_micros(2500),
            steps: 3,
            optimality: Optimality::Exact,
        };
        assert!((result.elapsed_ms() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_map_keeps_metrics() {
        let result = SolverResult {
            solution: vec![1, 2, 3],
            elapsed: Duration::from_millis(4),
            steps: 9,
            optimality: Optimality::Heuristic,
        };
        let mapped = result.map(|v| v.len());
        assert_eq!(mapped.solution, 3);
        assert_eq!(mapped.steps, 9);
        assert_eq!(mapped.optimality, Optimality::Heuristic);
    }
}
