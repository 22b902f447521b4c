//! Board generation options.

use super::types::Weighting;
use crate::error::{EngineError, Result};

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 6;
/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 12;

/// Options for snake & ladder board generation.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Board edge `N`; the board has `N²` cells.
    pub board_size: usize,

    /// Maximum placement attempts per jump kind.
    pub max_attempts: usize,

    /// Cost of a roll when the board is solved.
    pub weighting: Weighting,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            max_attempts: 1000,
            weighting: Weighting::Throws,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of snakes, and separately of ladders, to place: `max(1, N - 2)`.
    pub fn jumps_per_kind(&self) -> usize {
        self.board_size.saturating_sub(2).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(EngineError::invalid_config(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(EngineError::invalid_config("max_attempts must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.board_size, 6);
        assert_eq!(config.jumps_per_kind(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_size_range() {
        assert!(BoardConfig::default().with_board_size(5).validate().is_err());
        assert!(BoardConfig::default().with_board_size(13).validate().is_err());
        assert!(BoardConfig::default().with_board_size(12).validate().is_ok());
    }
}
