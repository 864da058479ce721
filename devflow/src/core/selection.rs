//! Uniform random choice behind a seam tests can replace.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `len` candidates.
pub trait Chooser {
    /// Returns `None` when there is nothing to choose from.
    fn choose(&mut self, len: usize) -> Option<usize>;
}

/// Uniform chooser backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible chooser: equal seeds yield equal choice sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_set_yields_none() {
        let mut chooser = RandomChooser::seeded(7);
        assert_eq!(chooser.choose(0), None);
    }

    #[test]
    fn choices_stay_in_range() {
        let mut chooser = RandomChooser::from_entropy();
        for len in 1..50 {
            let idx = chooser.choose(len).expect("choice");
            assert!(idx < len);
        }
    }

    #[test]
    fn equal_seeds_repeat_the_sequence() {
        let mut a = RandomChooser::seeded(42);
        let mut b = RandomChooser::seeded(42);
        let first: Vec<_> = (0..10).map(|_| a.choose(100)).collect();
        let second: Vec<_> = (0..10).map(|_| b.choose(100)).collect();
        assert_eq!(first, second);
    }
}
