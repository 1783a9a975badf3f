//! Deterministic random number generation.
//!
//! RULE: Nothing in the machine may call any platform RNG.
//! All randomness flows through ReelRng instances derived
//! from the single master seed of the session.
//!
//! Each round gets its own RNG stream, seeded deterministically
//! from (master_seed XOR round). This means:
//!   - Replaying a session with the same seed and wagers reproduces every grid.
//!   - Any single round's grid is reproducible in isolation.

use crate::types::Round;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG stream for one round of reel draws.
pub struct ReelRng {
    inner: Pcg64Mcg,
}

impl ReelRng {
    /// Create a round RNG from the master seed and the round number.
    pub fn new(master_seed: u64, round: Round) -> Self {
        let derived_seed = master_seed ^ round.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a usize uniformly in [0, n).
    pub fn next_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }
}

/// Hands out one RNG stream per round of a session.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_round(&self, round: Round) -> ReelRng {
        ReelRng::new(self.master_seed, round)
    }
}
