//! Seeded permutation of the ticket pool.
//!
//! This is the only place entropy enters a run. The generator is created per
//! run from the caller's seed and nothing else, so the same seed over the same
//! pool reproduces the same order on every platform.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Run-scoped deterministic generator.
pub struct DrawRng {
    seed: u64,
    inner: Pcg64Mcg,
}

impl DrawRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform integer in `[0, n)` using Lemire's multiply-and-reject method.
    /// Unbiased for every `n > 0`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; the range would be empty. [`shuffle`] never asks
    /// for it.
    pub fn next_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        let threshold = n.wrapping_neg() % n;
        loop {
            let m = u128::from(self.next_u64()) * u128::from(n);
            if (m as u64) >= threshold {
                return (m >> 64) as u64;
            }
        }
    }
}

/// Fisher–Yates, walking from the last slot down to the second.
pub fn shuffle<T>(items: &mut [T], rng: &mut DrawRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}
