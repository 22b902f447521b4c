//! Move-sequence generation for 3 and 4 pegs.

use super::types::{HanoiInstance, Move};
use crate::error::Result;
use crate::instrument::{measure, StepCounter};
use crate::result::{Optimality, SolverResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Move generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HanoiStrategy {
    /// Direct recursion.
    Recursive,
    /// The same decomposition driven by an explicit stack of frames.
    Iterative,
}

impl HanoiStrategy {
    pub fn name(self) -> &'static str {
        match self {
            HanoiStrategy::Recursive => "hanoi-recursive",
            HanoiStrategy::Iterative => "hanoi-iterative",
        }
    }
}

/// Frame–Stewart move counts and the split used at each size.
///
/// `counts[m]` is the 4-peg move count for `m` disks; `splits[m]` is the
/// smallest `k` minimising `2·counts[k] + 2^(m-k) - 1`. Both stop short of
/// `num_disks` at the first size whose count no longer fits in `u64`.
fn frame_stewart(num_disks: u32) -> (Vec<u64>, Vec<u32>) {
    let mut counts = vec![0u64];
    let mut splits = vec![0u32];
    for m in 1..=num_disks {
        if m == 1 {
            counts.push(1);
            splits.push(0);
            continue;
        }
        let mut best = u64::MAX;
        let mut split = 0;
        for k in 1..m {
            let crossing = if m - k < 64 { (1u64 << (m - k)) - 1 } else { u64::MAX };
            let total = counts[k as usize].saturating_mul(2).saturating_add(crossing);
            if total < best {
                best = total;
                split = k;
            }
        }
        if best == u64::MAX {
            break;
        }
        counts.push(best);
        splits.push(split);
    }
    (counts, splits)
}

/// Move count of the sequences produced here: `2^n - 1` for 3 pegs (the
/// proven minimum), the Frame–Stewart number for 4 pegs. `None` once the
/// count exceeds `u64`.
pub fn optimal_move_count(num_disks: u32, num_pegs: usize) -> Option<u64> {
    if num_pegs >= 4 {
        frame_stewart(num_disks).0.get(num_disks as usize).copied()
    } else {
        match num_disks {
            0..=63 => Some((1u64 << num_disks) - 1),
            64 => Some(u64::MAX),
            _ => None,
        }
    }
}

/// Moves for `num_disks` disks from peg `A` to the last peg, generated
/// recursively.
pub fn hanoi_moves(num_disks: u32, num_pegs: usize) -> Result<Vec<Move>> {
    let instance = HanoiInstance::new(num_disks, num_pegs)?;
    Ok(HanoiRunner::run(&instance, HanoiStrategy::Recursive)?.solution)
}

/// Executes Tower of Hanoi move generation.
pub struct HanoiRunner;

impl HanoiRunner {
    /// Generates the full move list under instrumentation.
    ///
    /// 3-peg results are tagged exact. 4-peg results use the Frame–Stewart
    /// decomposition and are tagged heuristic. Step count is recursive
    /// calls made, or frames popped for the iterative strategy.
    pub fn run(instance: &HanoiInstance, strategy: HanoiStrategy) -> Result<SolverResult<Vec<Move>>> {
        let optimality = if instance.num_pegs() == 3 {
            Optimality::Exact
        } else {
            Optimality::Heuristic
        };

        measure(strategy.name(), optimality, |steps| {
            let n = instance.num_disks();
            let capacity = optimal_move_count(n, instance.num_pegs()).unwrap_or_default();
            let mut moves = Vec::with_capacity(capacity as usize);

            match (instance.num_pegs(), strategy) {
                (3, HanoiStrategy::Recursive) => three_peg(n, 0, 2, 1, &mut moves, steps),
                (3, HanoiStrategy::Iterative) => iterative(n, Frame::Three(n, 0, 2, 1), &[], &mut moves, steps),
                (_, HanoiStrategy::Recursive) => {
                    let (_, splits) = frame_stewart(n);
                    four_peg(n, [0, 3, 1, 2], &splits, &mut moves, steps);
                }
                (_, HanoiStrategy::Iterative) => {
                    let (_, splits) = frame_stewart(n);
                    iterative(n, Frame::Four(n, [0, 3, 1, 2]), &splits, &mut moves, steps);
                }
            }
            Ok(moves)
        })
    }
}

fn three_peg(n: u32, from: usize, to: usize, via: usize, moves: &mut Vec<Move>, steps: &mut StepCounter) {
    steps.tick();
    if n == 0 {
        return;
    }
    three_peg(n - 1, from, via, to, moves, steps);
    moves.push(Move::new(from, to));
    three_peg(n - 1, via, to, from, moves, steps);
}

/// `pegs` is `[from, to, spare_a, spare_b]`. The top `k` disks park on
/// `spare_a` using all four pegs, the rest cross on three pegs, then the
/// parked disks follow.
fn four_peg(n: u32, pegs: [usize; 4], splits: &[u32], moves: &mut Vec<Move>, steps: &mut StepCounter) {
    steps.tick();
    let [from, to, a, b] = pegs;
    match n {
        0 => {}
        1 => moves.push(Move::new(from, to)),
        _ => {
            let k = splits[n as usize];
            four_peg(k, [from, a, to, b], splits, moves, steps);
            three_peg(n - k, from, to, b, moves, steps);
            four_peg(k, [a, to, from, b], splits, moves, steps);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Three(u32, usize, usize, usize),
    Four(u32, [usize; 4]),
    Emit(Move),
}

/// Explicit-stack equivalent of [`three_peg`] and [`four_peg`]: sub-tasks
/// are pushed in reverse so they pop in recursion order.
fn iterative(n: u32, root: Frame, splits: &[u32], moves: &mut Vec<Move>, steps: &mut StepCounter) {
    let mut stack = Vec::with_capacity(2 * n as usize + 2);
    stack.push(root);

    while let Some(frame) = stack.pop() {
        steps.tick();
        match frame {
            Frame::Emit(mv) => moves.push(mv),
            Frame::Three(0, ..) | Frame::Four(0, _) => {}
            Frame::Three(m, from, to, via) => {
                stack.push(Frame::Three(m - 1, via, to, from));
                stack.push(Frame::Emit(Move::new(from, to)));
                stack.push(Frame::Three(m - 1, from, via, to));
            }
            Frame::Four(1, [from, to, _, _]) => moves.push(Move::new(from, to)),
            Frame::Four(m, [from, to, a, b]) => {
                let k = splits[m as usize];
                stack.push(Frame::Four(k, [a, to, from, b]));
                stack.push(Frame::Three(m - k, from, to, b));
                stack.push(Frame::Four(k, [from, a, to, b]));
            }
        }
    }
}
