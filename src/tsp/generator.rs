//! Random TSP instances.

use super::config::TspConfig;
use super::types::{DistanceMatrix, TspInstance};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;

/// Generates a symmetric distance matrix and a home city.
pub fn generate_tsp(config: &TspConfig) -> Result<TspInstance> {
    config.validate()?;
    let mut rng = create_rng(config.seed);

    let n = config.num_cities;
    let mut rows = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = rng.random_range(config.min_distance..=config.max_distance);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }

    let start_city = match config.start_city {
        Some(city) => city,
        None => rng.random_range(0..n),
    };

    Ok(TspInstance {
        matrix: DistanceMatrix::new(rows)?,
        start_city,
    })
}
