//! Placement checking.

use super::types::Placement;
use crate::validation::{Verdict, Violation};
use std::collections::HashSet;

/// Checks every placement has `n` queens on the board with no two sharing
/// a row or diagonal, and that no placement is listed twice. Columns are
/// distinct by construction.
pub fn validate_placements(n: usize, solutions: &[Placement]) -> Verdict {
    let mut seen = HashSet::with_capacity(solutions.len());

    for (index, placement) in solutions.iter().enumerate() {
        if placement.len() != n {
            return Err(Violation::Shape(format!(
                "placement {index} has {} queens for n = {n}",
                placement.len()
            )));
        }
        if let Some(&row) = placement.iter().find(|&&row| row >= n) {
            return Err(Violation::Shape(format!(
                "placement {index} uses row {row} outside the board"
            )));
        }

        for a in 0..n {
            for b in (a + 1)..n {
                let (ra, rb) = (placement[a], placement[b]);
                if ra == rb || ra.abs_diff(rb) == b - a {
                    return Err(Violation::QueensAttack { a, b });
                }
            }
        }

        if !seen.insert(placement) {
            return Err(Violation::DuplicateSolution(index));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution() {
        assert!(validate_placements(4, &[vec![1, 3, 0, 2], vec![2, 0, 3, 1]]).is_ok());
    }

    #[test]
    fn test_diagonal_attack() {
        assert_eq!(
            validate_placements(4, &[vec![1, 3, 2, 0]]),
            Err(Violation::QueensAttack { a: 1, b: 2 })
        );
    }

    #[test]
    fn test_row_attack() {
        assert_eq!(
            validate_placements(4, &[vec![1, 3, 1, 2]]),
            Err(Violation::QueensAttack { a: 0, b: 2 })
        );
    }

    #[test]
    fn test_duplicate_reported() {
        assert_eq!(
            validate_placements(4, &[vec![1, 3, 0, 2], vec![1, 3, 0, 2]]),
            Err(Violation::DuplicateSolution(1))
        );
    }

    #[test]
    fn test_shape() {
        assert!(matches!(
            validate_placements(4, &[vec![1, 3, 0]]),
            Err(Violation::Shape(_))
        ));
        assert!(matches!(
            validate_placements(4, &[vec![1, 3, 0, 7]]),
            Err(Violation::Shape(_))
        ));
    }
}
