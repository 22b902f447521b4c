//! Distance matrix and tour types.

use crate::error::{EngineError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symmetric `N×N` matrix of non-negative integer distances with a zero
/// diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<u64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, rejecting ragged, asymmetric or
    /// non-zero-diagonal input.
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(EngineError::invalid_instance("distance matrix is empty"));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(EngineError::invalid_instance(format!(
                "row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        for i in 0..n {
            if rows[i][i] != 0 {
                return Err(EngineError::invalid_instance(format!(
                    "diagonal entry {i} is {}, expected 0",
                    rows[i][i]
                )));
            }
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(EngineError::invalid_instance(format!(
                        "d({i},{j}) = {} but d({j},{i}) = {}",
                        rows[i][j], rows[j][i]
                    )));
                }
            }
        }
        Ok(Self {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.n + to]
    }

    /// Sum of consecutive legs along `route`.
    pub fn route_distance(&self, route: &[usize]) -> u64 {
        route.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Display name of a city: `A`, `B`, ... then `C26`, `C27`, ...
    pub fn city_label(city: usize) -> String {
        if city < 26 {
            char::from(b'A' + city as u8).to_string()
        } else {
            format!("C{city}")
        }
    }
}

/// A closed tour and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspSolution {
    /// Cities in visiting order, starting and ending at the start city.
    pub tour: Vec<usize>,

    /// Total distance of the closed tour.
    pub distance: u64,
}

/// A TSP round: the matrix plus the home city.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspInstance {
    pub matrix: DistanceMatrix,
    pub start_city: usize,
}
