//! Shortest path over snake & ladder boards.
//!
//! A [`Board`] becomes a [`WeightedGraph`] with one edge per die roll.
//! [`PathStrategy::Bfs`] counts edges level by level;
//! [`PathStrategy::Dijkstra`] sums edge weights with a priority frontier.
//! With [`Weighting::Throws`] every weight is 1 and both agree.
//!
//! # References
//!
//! - Moore (1959), "The Shortest Path Through a Maze"
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"

mod config;
mod generator;
mod puzzle;
mod runner;
mod types;
mod validate;

pub use config::{BoardConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use generator::generate_board;
pub use puzzle::{BoardRound, ShortestPathPuzzle};
pub use runner::{PathRunner, PathStrategy};
pub use types::{Board, PathSolution, WeightedGraph, Weighting};
pub use validate::{reference_distances, validate_path};
