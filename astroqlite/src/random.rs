//! Generator state behind `RAND()`.
//!
//! One [`RandomSource`] belongs to one registration context and is shared by
//! `Arc` with the functions that draw from it. The generator sits behind a
//! mutex so concurrent evaluator threads never observe torn state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    /// Deterministic sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded once from the wall clock (nanoseconds since the Unix epoch).
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_f64(&self) -> f64 {
        // a panic elsewhere while holding the lock leaves the generator intact
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen::<f64>()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_clock()
    }
}
