//! Injectable pseudo-random source.
//!
//! Everything that picks at random (template choice, reply choice, mood
//! coin flips, latency jitter) draws from a [`RandomSource`]. Seeding it makes
//! a whole session reproducible.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shared, cloneable handle to a seeded random number generator.
///
/// Clones share the same generator state.
#[derive(Clone)]
pub struct RandomSource {
    rng: Arc<Mutex<StdRng>>,
    seed: Option<u64>,
}

impl RandomSource {
    /// Create a deterministic source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
            seed: Some(seed),
        }
    }

    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            seed: None,
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this source was built from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the generator in a bad state.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Uniform index in `0..len`. Returns `None` when `len` is zero.
    pub fn index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.lock().gen_range(0..len))
    }

    /// Uniformly pick one element of a slice.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|idx| &items[idx])
    }

    /// True with probability `probability`, clamped to `[0, 1]`.
    pub fn chance(&self, probability: f64) -> bool {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.lock().gen::<f64>() < probability
    }

    /// Uniform duration in `0..=max`, at millisecond resolution.
    pub fn jitter(&self, max: Duration) -> Duration {
        let max_ms = max.as_millis().min(u64::MAX as u128) as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.lock().gen_range(0..=max_ms))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
