//! Epsilon-greedy action selection.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::grid::Action;

/// Epsilon-greedy policy over the four grid actions.
///
/// With probability ε the policy explores (uniform over all actions),
/// otherwise it exploits the highest-valued action in the given row. Ties are
/// broken toward the first action in [`Action::ALL`] order, matching stable
/// `max` semantics.
#[derive(Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
    rng: StdRng,
}

impl EpsilonGreedy {
    /// Create a policy with the given exploration rate and a fresh RNG.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Replace the RNG with a deterministic, seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Exploration rate ε.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// ε-greedy selection over a state's action-value row.
    pub fn select(&mut self, row: &[f64; Action::COUNT]) -> Action {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniform over all actions
            *Action::ALL.choose(&mut self.rng).unwrap()
        } else {
            // Exploit: stable argmax over the row
            Self::greedy(row)
        }
    }

    /// Argmax over the row, first index winning ties.
    fn greedy(row: &[f64; Action::COUNT]) -> Action {
        let mut best = 0;
        for (i, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = i;
            }
        }
        Action::ALL[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_epsilon_is_deterministic_argmax() {
        let mut policy = EpsilonGreedy::new(0.0).with_seed(7);
        let row = [0.1, 0.9, 0.3, 0.2];
        for _ in 0..100 {
            assert_eq!(policy.select(&row), Action::South);
        }
    }

    #[test]
    fn test_ties_break_toward_first_action() {
        let mut policy = EpsilonGreedy::new(0.0).with_seed(11);
        assert_eq!(policy.select(&[0.0, 0.0, 0.0, 0.0]), Action::North);
        assert_eq!(policy.select(&[0.0, 2.0, 2.0, 0.0]), Action::South);
        assert_eq!(policy.select(&[-1.0, -1.0, -0.5, -0.5]), Action::West);
    }

    #[test]
    fn test_full_epsilon_explores_uniformly() {
        let mut policy = EpsilonGreedy::new(1.0).with_seed(42);
        // A row that would always exploit to North if exploitation leaked in.
        let row = [100.0, 0.0, 0.0, 0.0];

        let mut counts = [0usize; Action::COUNT];
        let trials = 10_000;
        for _ in 0..trials {
            counts[policy.select(&row).index()] += 1;
        }

        // Each action expects trials / 4 = 2500 draws; allow a generous
        // tolerance around the binomial standard deviation (~43).
        for count in counts {
            assert!(
                (2200..=2800).contains(&count),
                "non-uniform exploration: {counts:?}"
            );
        }
    }
}
