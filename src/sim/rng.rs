//! Seeded random source for the simulation
//!
//! Every random decision (brick layout, power-up drops, bounce jitter) goes
//! through this wrapper so a seed plus an input stream replays exactly.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `lo..=hi`. Returns `lo` when the range is empty.
    pub fn random_int(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }

    /// True with the given percent chance
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.random_int(1, 100) <= percent as i32
    }

    /// +1.0 or -1.0 with equal probability
    pub fn coin_flip_sign(&mut self) -> f32 {
        if self.random_int(0, 1) == 0 { -1.0 } else { 1.0 }
    }

    /// Uniform in-place shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0)
    }
}
