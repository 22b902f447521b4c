//! Tower rounds.

use super::config::HanoiConfig;
use super::types::HanoiInstance;
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;

/// Builds the round described by `config`, drawing the disk count from
/// `5..=10` when none is fixed.
pub fn generate_tower(config: &HanoiConfig) -> Result<HanoiInstance> {
    config.validate()?;
    let disks = match config.num_disks {
        Some(n) => n,
        None => create_rng(config.seed).random_range(5..=10),
    };
    HanoiInstance::new(disks, config.num_pegs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let inst = generate_tower(&HanoiConfig::default()).unwrap();
        assert_eq!(inst.num_disks(), 5);
        assert_eq!(inst.num_pegs(), 3);
    }

    #[test]
    fn test_random_disks_in_round_range() {
        for seed in 0..20 {
            let config = HanoiConfig::default().with_random_disks().with_seed(seed);
            let inst = generate_tower(&config).unwrap();
            assert!((5..=10).contains(&inst.num_disks()));
        }
    }

    #[test]
    fn test_four_peg_round() {
        let config = HanoiConfig::default().with_num_pegs(4).with_num_disks(7);
        let inst = generate_tower(&config).unwrap();
        assert_eq!(inst.target(), 3);
    }
}
