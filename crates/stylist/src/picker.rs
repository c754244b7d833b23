//! Random source for the outfit composer.
//!
//! The composer asks a [`Picker`] for an index instead of touching a global
//! generator, so every call owns its randomness and tests can script the
//! exact picks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Picker {
    /// An index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picks from any `rand` generator.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// A picker with its own OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible picks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices (each clamped into range), cycling when
/// exhausted. `ScriptedPicker::new(vec![])` always picks the first item.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    pub fn first() -> Self {
        Self::default()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        index.min(len.saturating_sub(1))
    }
}
