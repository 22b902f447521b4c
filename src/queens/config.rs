//! N-Queens options.

use crate::error::{EngineError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported board.
pub const MAX_QUEENS: usize = 16;

/// What the search is asked to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueensGoal {
    /// Every distinct placement. Never cancels early.
    #[default]
    All,
    /// Stop at the first placement any worker finds.
    First,
}

/// Options for an N-Queens search.
///
/// # Examples
///
/// ```
/// use u_puzzle::queens::{QueensConfig, QueensGoal};
///
/// let config = QueensConfig::default()
///     .with_n(10)
///     .with_goal(QueensGoal::First)
///     .with_workers(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct QueensConfig {
    /// Board size and number of queens.
    pub n: usize,

    /// All placements or the first one.
    pub goal: QueensGoal,

    /// Worker threads for parallel mode. `None` uses the available
    /// hardware threads. Always capped at `n`.
    pub workers: Option<usize>,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            n: 8,
            goal: QueensGoal::All,
            workers: None,
        }
    }
}

impl QueensConfig {
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_goal(mut self, goal: QueensGoal) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_QUEENS).contains(&self.n) {
            return Err(EngineError::invalid_config(format!(
                "n must be in 1..={MAX_QUEENS}, got {}",
                self.n
            )));
        }
        if self.workers == Some(0) {
            return Err(EngineError::invalid_config("workers must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eight_queens() {
        let config = QueensConfig::default();
        assert_eq!(config.n, 8);
        assert_eq!(config.goal, QueensGoal::All);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(QueensConfig::default().with_n(0).validate().is_err());
        assert!(QueensConfig::default().with_n(17).validate().is_err());
        assert!(QueensConfig::default().with_workers(0).validate().is_err());
    }
}
