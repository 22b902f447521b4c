//! Algorithm engine for classic puzzle families.
//!
//! Each family generates instances, solves them with more than one
//! strategy under timing and step instrumentation, and re-checks the
//! result with an independent validator:
//!
//! - **Max flow** ([`flow`]): Ford-Fulkerson and Edmonds-Karp with
//!   per-edge flows and min-cut certification.
//! - **Shortest path** ([`path`]): BFS and Dijkstra over generated snake &
//!   ladder boards.
//! - **TSP** ([`tsp`]): exhaustive permutation search and the
//!   nearest-neighbour heuristic.
//! - **Tower of Hanoi** ([`hanoi`]): recursive and explicit-stack move
//!   generation for 3 pegs, Frame–Stewart for 4.
//! - **N-Queens** ([`queens`]): sequential and parallel backtracking with
//!   worker-failure isolation.
//!
//! # Architecture
//!
//! Every family implements the [`engine::Puzzle`] contract
//! (`generate_instance`, `solve`, `validate`). Solvers run inside
//! [`instrument::measure`] and return a [`result::SolverResult`] tagged
//! exact or heuristic. Validators report the first broken rule as a
//! [`validation::Violation`]. Persistence is reached only through
//! [`record::ResultSink`] with a flat [`record::PerformanceRecord`].
//!
//! Logging goes through the `log` facade; the crate never installs a
//! logger.

pub mod engine;
pub mod error;
pub mod flow;
pub mod hanoi;
pub mod instrument;
pub mod path;
pub mod queens;
pub mod random;
pub mod record;
pub mod result;
pub mod tsp;
pub mod validation;

pub use engine::{Puzzle, PuzzleKind};
pub use error::{EngineError, Result};
pub use result::{Optimality, SolverResult};
