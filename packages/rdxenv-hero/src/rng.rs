//! Injectable randomness for every decision the hero effects make.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of pseudo-random numbers.
///
/// Only [`RandomSource::next_u64`] is required; the other draws are derived
/// from it so a scripted source in tests controls all of them.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in `[0, len)`; `0` when `len` is zero.
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    fn next_bool(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}

/// xorshift64* generator.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u64,
}

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

impl XorShiftRng {
    pub fn seeded(seed: u64) -> Self {
        // A zero state never leaves zero.
        let state = if seed == 0 { GOLDEN_GAMMA } else { seed };
        Self { state }
    }

    /// Seeds from the clock and a process-wide counter, so two generators
    /// created in the same instant still diverge.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let count = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::seeded(nanos ^ count.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA))
    }
}

impl RandomSource for XorShiftRng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Shuffles a copy of `pool` and returns its first element.
pub fn shuffled_first<T: Clone>(pool: &[T], rng: &mut dyn RandomSource) -> Option<T> {
    let mut copy = pool.to_vec();
    shuffle(&mut copy, rng);
    copy.into_iter().next()
}
