//! Exhaustive and greedy tour construction.

use super::types::{DistanceMatrix, TspSolution};
use crate::error::{EngineError, Result};
use crate::instrument::{measure, StepCounter};
use crate::result::{Optimality, SolverResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest instance brute force accepts: `(N-1)!` tours, 362 880 at N = 10.
pub const MAX_BRUTE_FORCE_CITIES: usize = 10;

/// Tour construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TspStrategy {
    /// Enumerate every ordering of the other cities. Exact.
    BruteForce,
    /// Always travel to the closest unvisited city. Heuristic.
    NearestNeighbor,
}

impl TspStrategy {
    pub fn name(self) -> &'static str {
        match self {
            TspStrategy::BruteForce => "brute-force",
            TspStrategy::NearestNeighbor => "nearest-neighbor",
        }
    }

    pub fn optimality(self) -> Optimality {
        match self {
            TspStrategy::BruteForce => Optimality::Exact,
            TspStrategy::NearestNeighbor => Optimality::Heuristic,
        }
    }
}

/// Executes TSP strategies.
pub struct TspRunner;

impl TspRunner {
    /// Builds a closed tour from `start_city` under instrumentation.
    ///
    /// Brute force counts permutations tried; nearest neighbour counts
    /// candidate distances compared.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInstance`] when `start_city` is not a city.
    /// - [`EngineError::PreconditionViolation`] when brute force is asked
    ///   for more than [`MAX_BRUTE_FORCE_CITIES`] cities.
    pub fn run(
        matrix: &DistanceMatrix,
        start_city: usize,
        strategy: TspStrategy,
    ) -> Result<SolverResult<TspSolution>> {
        if start_city >= matrix.len() {
            return Err(EngineError::invalid_instance(format!(
                "start city {start_city} outside 0..{}",
                matrix.len()
            )));
        }
        if strategy == TspStrategy::BruteForce && matrix.len() > MAX_BRUTE_FORCE_CITIES {
            return Err(EngineError::precondition(format!(
                "brute force supports at most {MAX_BRUTE_FORCE_CITIES} cities, got {}",
                matrix.len()
            )));
        }

        measure(strategy.name(), strategy.optimality(), |steps| {
            Ok(match strategy {
                TspStrategy::BruteForce => brute_force(matrix, start_city, steps),
                TspStrategy::NearestNeighbor => nearest_neighbor(matrix, start_city, steps),
            })
        })
    }
}

/// Rearranges `perm` into its lexicographic successor; `false` once the
/// last permutation has been passed.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

fn closed_tour(start: usize, middle: &[usize]) -> Vec<usize> {
    let mut tour = Vec::with_capacity(middle.len() + 2);
    tour.push(start);
    tour.extend_from_slice(middle);
    tour.push(start);
    tour
}

/// Lexicographic enumeration; the first ordering reaching the minimum wins.
fn brute_force(matrix: &DistanceMatrix, start: usize, steps: &mut StepCounter) -> TspSolution {
    let mut order: Vec<usize> = (0..matrix.len()).filter(|&c| c != start).collect();
    let mut best_order = order.clone();
    let mut best = u64::MAX;

    loop {
        steps.tick();
        let mut distance = 0u64;
        let mut current = start;
        for &city in &order {
            distance += matrix.get(current, city);
            current = city;
        }
        distance += matrix.get(current, start);

        if distance < best {
            best = distance;
            best_order.copy_from_slice(&order);
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    TspSolution {
        tour: closed_tour(start, &best_order),
        distance: best,
    }
}

/// Greedy extension; ties go to the lowest city index.
fn nearest_neighbor(matrix: &DistanceMatrix, start: usize, steps: &mut StepCounter) -> TspSolution {
    let n = matrix.len();
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut tour = Vec::with_capacity(n + 1);
    tour.push(start);
    let mut current = start;
    let mut distance = 0u64;

    for _ in 1..n {
        let mut nearest: Option<(u64, usize)> = None;
        for city in (0..n).filter(|&c| !visited[c]) {
            steps.tick();
            let d = matrix.get(current, city);
            if nearest.is_none_or(|(best, _)| d < best) {
                nearest = Some((d, city));
            }
        }
        let Some((d, city)) = nearest else { break };
        visited[city] = true;
        tour.push(city);
        distance += d;
        current = city;
    }

    distance += matrix.get(current, start);
    tour.push(start);
    TspSolution { tour, distance }
}
