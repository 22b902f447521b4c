//! Tower generation options.

use super::types::MAX_DISKS;
use crate::error::{EngineError, Result};

/// Options for a Tower of Hanoi round.
///
/// `num_disks: None` draws a size from `5..=10` with the seeded generator.
#[derive(Debug, Clone)]
pub struct HanoiConfig {
    /// Number of disks, or `None` for a random round size.
    pub num_disks: Option<u32>,

    /// Number of pegs: 3 or 4.
    pub num_pegs: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            num_disks: Some(5),
            num_pegs: 3,
            seed: None,
        }
    }
}

impl HanoiConfig {
    pub fn with_num_disks(mut self, n: u32) -> Self {
        self.num_disks = Some(n);
        self
    }

    pub fn with_random_disks(mut self) -> Self {
        self.num_disks = None;
        self
    }

    pub fn with_num_pegs(mut self, pegs: usize) -> Self {
        self.num_pegs = pegs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.num_disks {
            if !(1..=MAX_DISKS).contains(&n) {
                return Err(EngineError::invalid_config(format!(
                    "num_disks must be in 1..={MAX_DISKS}, got {n}"
                )));
            }
        }
        if self.num_pegs != 3 && self.num_pegs != 4 {
            return Err(EngineError::invalid_config(format!(
                "num_pegs must be 3 or 4, got {}",
                self.num_pegs
            )));
        }
        Ok(())
    }
}
