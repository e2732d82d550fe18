//! Random operand generation.
//!
//! Operands are non-negative big integers bounded by a bit count. The
//! production source draws them from a seeded ChaCha8 RNG, so a run is
//! reproducible whenever its seed is known.
//!
//! # Determinism
//!
//! Given the same seed and the same sequence of `next_operand` calls, the
//! drawn values are bit-identical. Without an explicit seed the wall clock is
//! used and values vary per run.

use crate::band::Band;
use num_bigint::{BigUint, RandBigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A source of non-negative operands.
pub trait OperandSource {
    /// Return an integer in `[0, 2^bits)`.
    fn next_operand(&mut self, bits: u64) -> BigUint;
}

/// A dividend/divisor pair drawn from one band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandPair {
    pub a: BigUint,
    pub b: BigUint,
}

/// Draw `a` then `b` for `band` from `source`.
pub fn next_pair<S: OperandSource + ?Sized>(source: &mut S, band: &Band) -> OperandPair {
    let a = source.next_operand(band.bits_a);
    let b = source.next_operand(band.bits_b);
    OperandPair { a, b }
}

/// Uniform operands from an explicitly seeded ChaCha8 RNG.
#[derive(Debug, Clone)]
pub struct RandomOperands {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomOperands {
    /// Create a source with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from the wall clock (milliseconds since the epoch).
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// Seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl OperandSource for RandomOperands {
    fn next_operand(&mut self, bits: u64) -> BigUint {
        self.rng.gen_biguint(bits)
    }
}

/// Replays a fixed list of operands, cycling when it runs out.
///
/// Values are returned as given; the bit cap is not applied. An empty list
/// yields zero forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOperands {
    values: Vec<BigUint>,
    pos: usize,
}

impl ScriptedOperands {
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }
}

impl OperandSource for ScriptedOperands {
    fn next_operand(&mut self, _bits: u64) -> BigUint {
        if self.values.is_empty() {
            return BigUint::default();
        }
        let value = self.values[self.pos % self.values.len()].clone();
        self.pos += 1;
        value
    }
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
pub fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
