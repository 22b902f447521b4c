//! Sequential and parallel backtracking.

use super::config::QueensGoal;
use super::types::{Occupancy, Placement, QueensInstance, QueensSolution};
use crate::error::{EngineError, Result};
use crate::instrument::{measure, StepCounter};
use crate::result::{Optimality, SolverResult};
use rayon::prelude::*;
use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the search tree is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueensMode {
    /// Single-threaded column-by-column backtracking.
    Sequential,
    /// One subtree per first-column row, explored on a worker pool.
    Parallel,
}

impl QueensMode {
    pub fn name(self) -> &'static str {
        match self {
            QueensMode::Sequential => "queens-sequential",
            QueensMode::Parallel => "queens-parallel",
        }
    }
}

/// Executes N-Queens searches.
pub struct QueensRunner;

impl QueensRunner {
    /// Runs the search under instrumentation. Steps are search nodes
    /// explored, summed over workers.
    ///
    /// Worker panics in parallel mode do not fail the call: they land in
    /// [`QueensSolution::failures`] next to the surviving placements.
    pub fn run(instance: &QueensInstance, mode: QueensMode) -> Result<SolverResult<QueensSolution>> {
        measure(mode.name(), Optimality::Exact, |steps| match mode {
            QueensMode::Sequential => Ok(sequential(instance, steps)),
            QueensMode::Parallel => {
                let n = instance.n();
                let goal = instance.goal();
                parallel(instance, steps, |row, stop| explore_subtree(n, row, goal, stop))
            }
        })
    }
}

/// Depth-first search state owned by one worker.
struct Search<'a> {
    n: usize,
    goal: QueensGoal,
    stop: Option<&'a AtomicBool>,
    occupancy: Occupancy,
    board: Placement,
    found: Vec<Placement>,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(n: usize, goal: QueensGoal, stop: Option<&'a AtomicBool>) -> Self {
        Self {
            n,
            goal,
            stop,
            occupancy: Occupancy::new(n),
            board: vec![0; n],
            found: Vec::new(),
            nodes: 0,
        }
    }

    fn place(&mut self, row: usize, col: usize) {
        self.occupancy.set(row, col, true);
        self.board[col] = row;
    }

    fn remove(&mut self, row: usize, col: usize) {
        self.occupancy.set(row, col, false);
    }

    /// Fills columns `col..n`. Returns `true` once the search must stop.
    fn explore(&mut self, col: usize) -> bool {
        self.nodes += 1;
        if self.stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
            return true;
        }

        if col == self.n {
            self.found.push(self.board.clone());
            if self.goal == QueensGoal::First {
                if let Some(stop) = self.stop {
                    stop.store(true, Ordering::Relaxed);
                }
                return true;
            }
            return false;
        }

        for row in 0..self.n {
            if self.occupancy.is_safe(row, col) {
                self.place(row, col);
                let done = self.explore(col + 1);
                self.remove(row, col);
                if done {
                    return true;
                }
            }
        }
        false
    }
}

fn sequential(instance: &QueensInstance, steps: &mut StepCounter) -> QueensSolution {
    let mut search = Search::new(instance.n(), instance.goal(), None);
    search.explore(0);
    steps.add(search.nodes);
    QueensSolution {
        solutions: search.found,
        failures: Vec::new(),
    }
}

/// Explores the subtree with the first-column queen on `first_row`.
/// Returns the placements found and the nodes visited.
fn explore_subtree(n: usize, first_row: usize, goal: QueensGoal, stop: &AtomicBool) -> (Vec<Placement>, u64) {
    let mut search = Search::new(n, goal, Some(stop));
    search.place(first_row, 0);
    search.explore(1);
    (search.found, search.nodes)
}

fn hardware_threads() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Fans the first column out over a bounded pool. Each worker returns its
/// own placements; a single pass merges them once every worker is done.
fn parallel<W>(instance: &QueensInstance, steps: &mut StepCounter, worker: W) -> Result<QueensSolution>
where
    W: Fn(usize, &AtomicBool) -> (Vec<Placement>, u64) + Sync,
{
    let n = instance.n();
    let threads = instance.workers().unwrap_or_else(hardware_threads).clamp(1, n);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| EngineError::WorkerPool(e.to_string()))?;

    let stop = AtomicBool::new(false);
    let outcomes: Vec<_> = pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|row| panic::catch_unwind(AssertUnwindSafe(|| worker(row, &stop))))
            .collect()
    });

    let mut solution = QueensSolution::default();
    for (row, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok((found, nodes)) => {
                log::trace!("subtree {row}: {} placements, {nodes} nodes", found.len());
                steps.add(nodes);
                solution.solutions.extend(found);
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::warn!("subtree {row} failed: {message}");
                solution.failures.push(EngineError::WorkerFailure { subtree: row, message });
            }
        }
    }

    solution.solutions.sort_unstable();
    solution.solutions.dedup();
    if instance.goal() == QueensGoal::First {
        solution.solutions.truncate(1);
    }
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::{validate_placements, QueensConfig};

    fn instance(n: usize, goal: QueensGoal, workers: Option<usize>) -> QueensInstance {
        let mut config = QueensConfig::default().with_n(n).with_goal(goal);
        config.workers = workers;
        QueensInstance::from_config(&config).unwrap()
    }

    #[test]
    fn test_eight_queens_both_modes() {
        let inst = instance(8, QueensGoal::All, None);
        let seq = QueensRunner::run(&inst, QueensMode::Sequential).unwrap();
        let par = QueensRunner::run(&inst, QueensMode::Parallel).unwrap();

        assert_eq!(seq.solution.count(), 92);
        assert_eq!(par.solution.count(), 92);
        assert_eq!(seq.solution.solutions, par.solution.solutions);
        assert!(par.solution.is_complete());
        assert!(validate_placements(8, &par.solution.solutions).is_ok());
    }

    #[test]
    fn test_small_boards() {
        for (n, expected) in [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4)] {
            for mode in [QueensMode::Sequential, QueensMode::Parallel] {
                let inst = instance(n, QueensGoal::All, Some(2));
                let result = QueensRunner::run(&inst, mode).unwrap();
                assert_eq!(result.solution.count(), expected, "n={n} {mode:?}");
            }
        }
    }

    #[test]
    fn test_first_only() {
        let inst = instance(10, QueensGoal::First, None);
        for mode in [QueensMode::Sequential, QueensMode::Parallel] {
            let result = QueensRunner::run(&inst, mode).unwrap();
            assert_eq!(result.solution.count(), 1);
            assert!(validate_placements(10, &result.solution.solutions).is_ok());
        }
    }

    #[test]
    fn test_first_only_sequential_is_lexicographic_minimum() {
        let inst = instance(8, QueensGoal::First, None);
        let result = QueensRunner::run(&inst, QueensMode::Sequential).unwrap();
        assert_eq!(result.solution.solutions[0], vec![0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_worker_panic_isolated() {
        let inst = instance(8, QueensGoal::All, Some(4));
        let mut steps = StepCounter::new();
        let solution = parallel(&inst, &mut steps, |row, stop| {
            if row == 3 {
                panic!("subtree exploded");
            }
            explore_subtree(8, row, QueensGoal::All, stop)
        })
        .unwrap();

        assert_eq!(
            solution.failures,
            vec![EngineError::WorkerFailure {
                subtree: 3,
                message: "subtree exploded".into()
            }]
        );

        let full = QueensRunner::run(&instance(8, QueensGoal::All, None), QueensMode::Sequential).unwrap();
        let survivors: Vec<_> = full
            .solution
            .solutions
            .into_iter()
            .filter(|p| p[0] != 3)
            .collect();
        assert_eq!(solution.solutions, survivors);
        assert!(steps.get() > 0);
    }

    #[test]
    fn test_raised_stop_flag_ends_subtree_at_once() {
        let stop = AtomicBool::new(true);
        let (found, nodes) = explore_subtree(8, 0, QueensGoal::All, &stop);
        assert!(found.is_empty());
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_first_solution_stops_other_subtrees() {
        let stop = AtomicBool::new(false);
        let (found, _) = explore_subtree(6, 1, QueensGoal::First, &stop);
        assert_eq!(found.len(), 1);
        assert!(stop.load(Ordering::Relaxed));
    }

    #[test]
    fn test_parallel_first_explores_fewer_nodes() {
        let first = QueensRunner::run(&instance(12, QueensGoal::First, Some(4)), QueensMode::Parallel).unwrap();
        let all = QueensRunner::run(&instance(12, QueensGoal::All, Some(4)), QueensMode::Parallel).unwrap();
        assert_eq!(first.solution.count(), 1);
        assert_eq!(all.solution.count(), 14_200);
        assert!(first.steps < all.steps);
    }

    #[test]
    fn test_steps_match_across_modes() {
        let inst = instance(6, QueensGoal::All, None);
        let seq = QueensRunner::run(&inst, QueensMode::Sequential).unwrap();
        let par = QueensRunner::run(&inst, QueensMode::Parallel).unwrap();
        // Parallel workers never visit the shared root.
        assert_eq!(seq.steps, par.steps + 1);
    }
}
