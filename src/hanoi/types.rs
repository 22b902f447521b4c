//! Tower state and moves.

use crate::error::{EngineError, Result};
use crate::validation::Violation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported tower.
pub const MAX_DISKS: u32 = 20;

/// Peg label: `A`, `B`, `C`, `D`.
pub fn peg_label(peg: usize) -> char {
    char::from(b'A' + peg as u8)
}

/// One disk transfer between pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", peg_label(self.from), peg_label(self.to))
    }
}

/// A tower to move from peg `A` to the last peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HanoiInstance {
    num_disks: u32,
    num_pegs: usize,
}

impl HanoiInstance {
    /// Creates an instance with 3 or 4 pegs and `1..=MAX_DISKS` disks.
    pub fn new(num_disks: u32, num_pegs: usize) -> Result<Self> {
        if !(1..=MAX_DISKS).contains(&num_disks) {
            return Err(EngineError::invalid_instance(format!(
                "num_disks must be in 1..={MAX_DISKS}, got {num_disks}"
            )));
        }
        if num_pegs != 3 && num_pegs != 4 {
            return Err(EngineError::invalid_instance(format!(
                "num_pegs must be 3 or 4, got {num_pegs}"
            )));
        }
        Ok(Self { num_disks, num_pegs })
    }

    pub fn num_disks(&self) -> u32 {
        self.num_disks
    }

    pub fn num_pegs(&self) -> usize {
        self.num_pegs
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn target(&self) -> usize {
        self.num_pegs - 1
    }
}

/// Disk stacks, bottom first. Disk sizes run `1..=n`, 1 being smallest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HanoiState {
    pegs: Vec<Vec<u32>>,
}

impl HanoiState {
    /// All disks stacked on peg `A`.
    pub fn initial(num_disks: u32, num_pegs: usize) -> Self {
        let mut pegs = vec![Vec::new(); num_pegs];
        pegs[0] = (1..=num_disks).rev().collect();
        Self { pegs }
    }

    pub fn pegs(&self) -> &[Vec<u32>] {
        &self.pegs
    }

    /// Applies a move, refusing empty sources and larger-on-smaller placements.
    pub fn apply(&mut self, step: usize, mv: Move) -> std::result::Result<(), Violation> {
        let count = self.pegs.len();
        for peg in [mv.from, mv.to] {
            if peg >= count {
                return Err(Violation::NoSuchPeg { step, peg });
            }
        }
        let Some(&disk) = self.pegs[mv.from].last() else {
            return Err(Violation::EmptyPeg { step, peg: mv.from });
        };
        if let Some(&onto) = self.pegs[mv.to].last() {
            if onto < disk {
                return Err(Violation::LargerOnSmaller { step, disk, onto });
            }
        }
        self.pegs[mv.from].pop();
        self.pegs[mv.to].push(disk);
        Ok(())
    }

    /// Every peg strictly decreasing from bottom to top.
    pub fn is_well_formed(&self) -> bool {
        self.pegs
            .iter()
            .all(|stack| stack.windows(2).all(|w| w[0] > w[1]))
    }

    /// All `num_disks` disks on `target`.
    pub fn is_solved(&self, target: usize, num_disks: u32) -> bool {
        self.pegs
            .get(target)
            .is_some_and(|stack| stack.len() == num_disks as usize)
    }
}
