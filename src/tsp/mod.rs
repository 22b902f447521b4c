//! Travelling salesman tours.
//!
//! [`TspStrategy::BruteForce`] enumerates all `(N-1)!` orderings of the
//! non-home cities in lexicographic order and is exact up to
//! [`MAX_BRUTE_FORCE_CITIES`]. [`TspStrategy::NearestNeighbor`] is the
//! `O(N²)` greedy heuristic and is always tagged
//! [`Optimality::Heuristic`](crate::result::Optimality::Heuristic).
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"

mod config;
mod generator;
mod puzzle;
mod runner;
mod types;
mod validate;

pub use config::{TspConfig, MAX_CITIES};
pub use generator::generate_tsp;
pub use puzzle::TspPuzzle;
pub use runner::{TspRunner, TspStrategy, MAX_BRUTE_FORCE_CITIES};
pub use types::{DistanceMatrix, TspInstance, TspSolution};
pub use validate::validate_tour;
