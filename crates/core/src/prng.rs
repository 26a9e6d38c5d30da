//! Seedable randomness for scene generation.
//!
//! Every random choice a scene makes (bar heights, ring colors) is drawn from
//! a [`RandomSource`] handed in by the caller, never from global state. The
//! default source is [`Xorshift64`]: same seed, same image, on every platform.

use crate::error::SceneError;

/// A source of uniformly distributed 64-bit values.
pub trait RandomSource {
    /// Advances the source and returns the next 64-bit value.
    fn next_u64(&mut self) -> u64;
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is automatically
/// replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }
}

impl RandomSource for Xorshift64 {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

/// Returns an integer uniformly chosen from the inclusive range `[min, max]`.
///
/// Uses modulo reduction over the span, which carries negligible bias at
/// 64-bit state width. Returns `SceneError::InvalidRange` if `min > max`.
pub fn rand_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, SceneError> {
    if min > max {
        return Err(SceneError::InvalidRange { min, max });
    }
    // span wraps to 0 only for the full i64 range, where every value is valid.
    let span = max.abs_diff(min).wrapping_add(1);
    let offset = match span {
        0 => rng.next_u64(),
        span => rng.next_u64() % span,
    };
    Ok(min.wrapping_add(offset as i64))
}
