//! Move-list replay.

use super::runner::optimal_move_count;
use super::types::{HanoiInstance, HanoiState, Move};
use crate::result::Optimality;
use crate::validation::{Verdict, Violation};

/// Replays every move from the initial tower, rejecting illegal moves,
/// and checks the tower ends on the target peg. Exact results must also
/// hit the optimal move count.
pub fn validate_moves(instance: &HanoiInstance, moves: &[Move], optimality: Optimality) -> Verdict {
    let mut state = HanoiState::initial(instance.num_disks(), instance.num_pegs());
    for (step, &mv) in moves.iter().enumerate() {
        state.apply(step, mv)?;
    }

    if !state.is_solved(instance.target(), instance.num_disks()) {
        return Err(Violation::NotSolved);
    }

    if optimality.is_exact() {
        let expected = optimal_move_count(instance.num_disks(), instance.num_pegs()).unwrap_or(u64::MAX);
        if moves.len() as u64 != expected {
            return Err(Violation::MoveCount {
                expected,
                actual: moves.len() as u64,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hanoi::hanoi_moves;

    #[test]
    fn test_generated_moves_validate() {
        let inst = HanoiInstance::new(5, 3).unwrap();
        let moves = hanoi_moves(5, 3).unwrap();
        assert_eq!(validate_moves(&inst, &moves, Optimality::Exact), Ok(()));
    }

    #[test]
    fn test_incomplete_sequence() {
        let inst = HanoiInstance::new(2, 3).unwrap();
        let moves = [Move::new(0, 1), Move::new(0, 2)];
        assert_eq!(
            validate_moves(&inst, &moves, Optimality::Heuristic),
            Err(Violation::NotSolved)
        );
    }

    #[test]
    fn test_illegal_move_reported_with_step() {
        let inst = HanoiInstance::new(2, 3).unwrap();
        let moves = [Move::new(0, 1), Move::new(0, 1)];
        assert!(matches!(
            validate_moves(&inst, &moves, Optimality::Heuristic),
            Err(Violation::LargerOnSmaller { step: 1, .. })
        ));
    }

    #[test]
    fn test_exact_requires_minimum_length() {
        let inst = HanoiInstance::new(1, 3).unwrap();
        let moves = [Move::new(0, 1), Move::new(1, 2)];
        assert_eq!(
            validate_moves(&inst, &moves, Optimality::Exact),
            Err(Violation::MoveCount {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(validate_moves(&inst, &moves, Optimality::Heuristic), Ok(()));
    }
}
