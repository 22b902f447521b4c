//! Flat performance records handed to persistence.
//!
//! The engine never opens storage. Callers pass a [`ResultSink`] and the
//! engine only ever hands it a finished [`PerformanceRecord`].

use crate::engine::{Puzzle, PuzzleKind};
use crate::result::SolverResult;
use std::convert::Infallible;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row for the persistence collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceRecord {
    pub player_name: String,
    pub puzzle_id: PuzzleKind,
    pub moves_or_steps_made: u64,
    pub optimal_moves_or_value: u64,
    pub elapsed_time_ms: f64,
    pub efficiency_percent: f64,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

impl PerformanceRecord {
    /// Builds a record stamped with the current time.
    pub fn new(
        player_name: impl Into<String>,
        puzzle_id: PuzzleKind,
        moves_or_steps_made: u64,
        optimal_moves_or_value: u64,
        elapsed_time_ms: f64,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            puzzle_id,
            moves_or_steps_made,
            optimal_moves_or_value,
            elapsed_time_ms,
            efficiency_percent: efficiency_percent(optimal_moves_or_value, moves_or_steps_made),
            timestamp: unix_now(),
        }
    }

    /// Records a player's `achieved` answer against a solver result, whose
    /// objective is taken as the optimum and whose time is reported.
    pub fn from_result<P: Puzzle>(
        player_name: impl Into<String>,
        result: &SolverResult<P::Solution>,
        achieved: u64,
    ) -> Self {
        let optimal = P::objective(&result.solution).unwrap_or(0);
        Self::new(player_name, P::KIND, achieved, optimal, result.elapsed_ms())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// `optimal / achieved` as a percentage, for minimisation puzzles, and
/// `achieved / optimal` when the achieved value is the smaller one, as
/// with a flow. Always within `0..=100`; two zeros count as a perfect
/// match.
pub fn efficiency_percent(optimal: u64, achieved: u64) -> f64 {
    let (lo, hi) = if optimal <= achieved {
        (optimal, achieved)
    } else {
        (achieved, optimal)
    };
    if hi == 0 {
        return 100.0;
    }
    lo as f64 / hi as f64 * 100.0
}

/// Points for a numeric guess: 100 exact, 50 within 2, 25 within 5,
/// nothing beyond.
pub fn answer_score(answer: u64, correct: u64) -> u32 {
    match answer.abs_diff(correct) {
        0 => 100,
        1..=2 => 50,
        3..=5 => 25,
        _ => 0,
    }
}

/// Destination for finished records.
pub trait ResultSink {
    type Error;

    fn record(&mut self, record: &PerformanceRecord) -> Result<(), Self::Error>;
}

/// Keeps records in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<PerformanceRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    /// Records for one puzzle, best efficiency first.
    pub fn leaderboard(&self, puzzle: PuzzleKind) -> Vec<&PerformanceRecord> {
        let mut rows: Vec<_> = self.records.iter().filter(|r| r.puzzle_id == puzzle).collect();
        rows.sort_by(|a, b| {
            b.efficiency_percent
                .total_cmp(&a.efficiency_percent)
                .then(a.elapsed_time_ms.total_cmp(&b.elapsed_time_ms))
        });
        rows
    }
}

impl ResultSink for MemorySink {
    type Error = Infallible;

    fn record(&mut self, record: &PerformanceRecord) -> Result<(), Infallible> {
        log::debug!(
            "record {} on {}: {:.1}% efficiency",
            record.player_name,
            record.puzzle_id,
            record.efficiency_percent
        );
        self.records.push(record.clone());
        Ok(())
    }
}
