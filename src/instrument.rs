//! Performance instrumentation.
//!
//! [`measure`] wraps a solver invocation, timing it and handing it a
//! [`StepCounter`] to bump as it works. The wrapped closure decides what a
//! step means. A failing solver propagates its error unchanged and no
//! measurement is produced.

use crate::error::Result;
use crate::result::{Optimality, SolverResult};
use std::time::Instant;

/// Solver-supplied work counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    steps: u64,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one unit of work.
    #[inline]
    pub fn tick(&mut self) {
        self.steps += 1;
    }

    /// Records `n` units of work, e.g. when merging a worker's count.
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.steps += n;
    }

    pub fn get(&self) -> u64 {
        self.steps
    }
}

/// Runs `solver` under a timer and a fresh step counter.
///
/// The optimality tag is supplied by the caller, since only the strategy
/// knows whether it is exact.
pub fn measure<S, F>(label: &str, optimality: Optimality, solver: F) -> Result<SolverResult<S>>
where
    F: FnOnce(&mut StepCounter) -> Result<S>,
{
    let mut counter = StepCounter::new();
    let start = Instant::now();
    let solution = solver(&mut counter)?;
    let elapsed = start.elapsed();

    log::debug!(
        "{label}: {} steps in {:.3} ms ({:?})",
        counter.get(),
        elapsed.as_secs_f64() * 1000.0,
        optimality
    );

    Ok(SolverResult {
        solution,
        elapsed,
        steps: counter.get(),
        optimality,
    })
}
