//! Draw helpers over an injected random stream.
//!
//! Every draw consumes exactly one `next_u64`, so a seeded stream replays the
//! same level as long as callers keep their draw order.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform integer in `[min_value, max_value]`.
pub fn roll_inclusive<R: Rng + ?Sized>(rng: &mut R, min_value: i32, max_value: i32) -> i32 {
    debug_assert!(min_value <= max_value);
    let range_size = (i64::from(max_value) - i64::from(min_value) + 1) as u64;
    (i64::from(min_value) + (rng.next_u64() % range_size) as i64) as i32
}

/// Uniform float in `[0, 1)`.
pub fn roll_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    roll_unit(rng) < 0.5
}
