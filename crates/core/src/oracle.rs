//! The division oracle.
//!
//! Expected values come from `num-bigint`, which is trusted as correct; this
//! crate does not verify its results.

use crate::error::OracleError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Exact big-integer division and decimal rendering.
pub trait Oracle {
    /// Return `(a / b, a % b)`.
    ///
    /// For non-zero `b` the quotient is `floor(a / b)` and `0 <= r < b`.
    fn divide(&self, a: &BigUint, b: &BigUint) -> Result<(BigUint, BigUint), OracleError>;

    /// Canonical base-10 rendering: no sign, no leading zeros.
    fn to_decimal(&self, n: &BigUint) -> String;
}

/// Oracle backed by `num_integer::Integer::div_rem` on `BigUint`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigUintOracle;

impl Oracle for BigUintOracle {
    fn divide(&self, a: &BigUint, b: &BigUint) -> Result<(BigUint, BigUint), OracleError> {
        // div_rem panics on a zero divisor
        if b.is_zero() {
            return Err(OracleError::DivisionByZero);
        }
        Ok(a.div_rem(b))
    }

    fn to_decimal(&self, n: &BigUint) -> String {
        n.to_str_radix(10)
    }
}
