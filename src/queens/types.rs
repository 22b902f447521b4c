//! Boards and placements.

use super::config::{QueensConfig, QueensGoal, MAX_QUEENS};
use crate::error::{EngineError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One placement: `placement[col]` is the row of the queen in column `col`.
pub type Placement = Vec<usize>;

/// A board to fill, with the search goal and worker budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueensInstance {
    n: usize,
    goal: QueensGoal,
    workers: Option<usize>,
}

impl QueensInstance {
    /// Validates `config` and fixes the instance it describes.
    pub fn from_config(config: &QueensConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            n: config.n,
            goal: config.goal,
            workers: config.workers,
        })
    }

    /// An exhaustive search of an `n`×`n` board.
    pub fn new(n: usize) -> Result<Self> {
        if !(1..=MAX_QUEENS).contains(&n) {
            return Err(EngineError::invalid_instance(format!(
                "n must be in 1..={MAX_QUEENS}, got {n}"
            )));
        }
        Ok(Self {
            n,
            goal: QueensGoal::All,
            workers: None,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn goal(&self) -> QueensGoal {
        self.goal
    }

    pub fn workers(&self) -> Option<usize> {
        self.workers
    }
}

/// Placements found, plus any subtree that failed during a parallel run.
///
/// `solutions` is sorted lexicographically and free of duplicates. A
/// non-empty `failures` means the count is a lower bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueensSolution {
    pub solutions: Vec<Placement>,
    pub failures: Vec<EngineError>,
}

impl QueensSolution {
    pub fn count(&self) -> usize {
        self.solutions.len()
    }

    /// No subtree failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Row and diagonal occupancy for column-by-column placement.
///
/// Diagonal `row + col` and anti-diagonal `row + n - 1 - col` each index
/// `2n - 1` slots, so the safety test is three lookups.
#[derive(Debug, Clone)]
pub(crate) struct Occupancy {
    n: usize,
    rows: Vec<bool>,
    diag: Vec<bool>,
    anti: Vec<bool>,
}

impl Occupancy {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            rows: vec![false; n],
            diag: vec![false; 2 * n - 1],
            anti: vec![false; 2 * n - 1],
        }
    }

    #[inline]
    pub(crate) fn is_safe(&self, row: usize, col: usize) -> bool {
        !self.rows[row] && !self.diag[row + col] && !self.anti[row + self.n - 1 - col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, occupied: bool) {
        self.rows[row] = occupied;
        self.diag[row + col] = occupied;
        self.anti[row + self.n - 1 - col] = occupied;
    }
}
