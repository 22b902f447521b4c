//! Random snake & ladder boards.

use super::config::BoardConfig;
use super::types::Board;
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;
use std::collections::HashSet;

/// Generates a board according to `config`.
///
/// Ladders are placed first, then snakes. Cells 1 and `N²` are never
/// used and no cell is used twice, so no jump lands on another jump.
/// Every ladder climbs and every snake drops at least one row (`N`
/// cells). When the attempt budget runs out the board keeps what was
/// placed and a warning is logged.
pub fn generate_board(config: &BoardConfig) -> Result<Board> {
    config.validate()?;
    let mut rng = create_rng(config.seed);

    let n = config.board_size;
    let total = n * n;
    let wanted = config.jumps_per_kind();
    let mut used: HashSet<usize> = HashSet::from([1, total]);

    let mut ladders = Vec::with_capacity(wanted);
    let mut attempts = 0;
    while ladders.len() < wanted && attempts < config.max_attempts {
        attempts += 1;
        let start = rng.random_range(2..=total - 1 - n);
        let end = rng.random_range(start + n..=total - 1);
        if !used.contains(&start) && !used.contains(&end) {
            used.insert(start);
            used.insert(end);
            ladders.push((start, end));
        }
    }

    let mut snakes = Vec::with_capacity(wanted);
    let mut attempts = 0;
    while snakes.len() < wanted && attempts < config.max_attempts {
        attempts += 1;
        let start = rng.random_range(n + 2..=total - 1);
        let end = rng.random_range(2..=start - n);
        if !used.contains(&start) && !used.contains(&end) {
            used.insert(start);
            used.insert(end);
            snakes.push((start, end));
        }
    }

    if ladders.len() < wanted || snakes.len() < wanted {
        log::warn!(
            "board {n}x{n}: placed {} ladders and {} snakes, wanted {wanted} each",
            ladders.len(),
            snakes.len()
        );
    }

    Board::new(n, &ladders, &snakes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_boards_are_valid() {
        for size in 6..=12 {
            for seed in 0..10 {
                let config = BoardConfig::default().with_board_size(size).with_seed(seed);
                let board = generate_board(&config).unwrap();
                assert_eq!(board.total_cells(), size * size);
                assert_eq!(board.ladders().count(), size - 2);
                assert_eq!(board.snakes().count(), size - 2);
            }
        }
    }

    #[test]
    fn test_jumps_span_at_least_one_row() {
        for size in [6, 8, 12] {
            for seed in 0..50 {
                let config = BoardConfig::default().with_board_size(size).with_seed(seed);
                let board = generate_board(&config).unwrap();
                for (bottom, top) in board.ladders() {
                    assert!(top - bottom >= size, "ladder {bottom}->{top} on {size}x{size}");
                }
                for (head, tail) in board.snakes() {
                    assert!(head - tail >= size, "snake {head}->{tail} on {size}x{size}");
                }
            }
        }
    }

    #[test]
    fn test_attempt_budget_respected() {
        let config = BoardConfig::default().with_max_attempts(1).with_seed(1);
        let board = generate_board(&config).unwrap();
        assert!(board.ladders().count() <= 1);
        assert!(board.snakes().count() <= 1);
    }

    #[test]
    fn test_seed_reproducible() {
        let config = BoardConfig::default().with_board_size(9).with_seed(42);
        assert_eq!(generate_board(&config).unwrap(), generate_board(&config).unwrap());
    }
}
