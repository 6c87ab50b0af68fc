use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable randomness owned by one session, so a recorded seed reproduces
/// every random pick the computer makes.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);

        let a: Vec<usize> = (0..20).map(|_| first.random_index(9)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.random_index(9)).collect();

        assert_eq!(a, b);
        assert_eq!(first.seed(), 42);
    }

    #[test]
    fn test_random_index_stays_in_range() {
        let mut rng = SessionRng::new(7);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.random_index(len) < len);
            }
        }
    }

    #[test]
    fn test_coin_flip_produces_both_sides() {
        let mut rng = SessionRng::new(3);
        let flips: Vec<bool> = (0..100).map(|_| rng.coin_flip()).collect();

        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }
}
