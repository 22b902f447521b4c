//! TSP instance generation options.

use crate::error::{EngineError, Result};

/// Largest generated instance.
pub const MAX_CITIES: usize = 26;

/// Options for random distance matrices.
///
/// # Examples
///
/// ```
/// use u_puzzle::tsp::TspConfig;
///
/// let config = TspConfig::default().with_num_cities(8).with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TspConfig {
    /// Number of cities.
    pub num_cities: usize,

    /// Smallest distance between two distinct cities.
    pub min_distance: u64,

    /// Largest distance between two distinct cities.
    pub max_distance: u64,

    /// Home city; drawn at random when `None`.
    pub start_city: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            num_cities: 6,
            min_distance: 50,
            max_distance: 100,
            start_city: None,
            seed: None,
        }
    }
}

impl TspConfig {
    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    pub fn with_distance_range(mut self, min: u64, max: u64) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = Some(city);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CITIES).contains(&self.num_cities) {
            return Err(EngineError::invalid_config(format!(
                "num_cities must be in 1..={MAX_CITIES}, got {}",
                self.num_cities
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(EngineError::invalid_config(
                "min_distance must not exceed max_distance",
            ));
        }
        if let Some(city) = self.start_city {
            if city >= self.num_cities {
                return Err(EngineError::invalid_config(format!(
                    "start_city {city} outside 0..{}",
                    self.num_cities
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TspConfig::default();
        assert_eq!(config.num_cities, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_start_city() {
        let config = TspConfig::default().with_num_cities(4).with_start_city(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_city_count() {
        assert!(TspConfig::default().with_num_cities(0).validate().is_err());
        assert!(TspConfig::default().with_num_cities(27).validate().is_err());
    }

    #[test]
    fn test_validate_distance_range() {
        let config = TspConfig::default().with_distance_range(9, 1);
        assert!(config.validate().is_err());
    }
}
