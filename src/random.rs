//! Seeded random number generation for instance generators.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a generator from an optional seed.
///
/// `Some(seed)` gives a reproducible stream; `None` draws a fresh seed
/// from the thread-local generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(Some(7));
        let mut b = create_rng(Some(7));
        for _ in 0..16 {
            assert_eq!(a.random_range(0..1000u32), b.random_range(0..1000u32));
        }
    }
}
