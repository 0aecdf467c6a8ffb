//! Random Source Adapters
//!
//! - `ThreadRandom`: thread-local RNG, for live sessions
//! - `SeededRandom`: reproducible runs from a `u64` seed
//! - `FixedRandom` / `SequenceRandom`: forced outcomes

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Rolls from the thread-local generator
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn next_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic rolls from a seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl FixedRandom {
    /// A roll that clears any chance policy with probability above `f64::EPSILON`
    pub fn always_match() -> Self {
        Self(1.0 - f64::EPSILON)
    }

    /// A roll that no chance policy below 1.0 accepts
    pub fn never_match() -> Self {
        Self(0.0)
    }
}

impl RandomSource for FixedRandom {
    fn next_roll(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of rolls
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    rolls: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    /// An empty list behaves like `FixedRandom::never_match`
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, position: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.position % self.rolls.len()];
        self.position = (self.position + 1) % self.rolls.len();
        roll
    }
}
