//! Bit-length bands.
//!
//! A band says how many records to generate and how wide each operand may be.
//! The default plan walks four regimes in a fixed order: medium operands,
//! two passes of large operands, and large dividends over tiny divisors.

use crate::error::{BandError, Result};
use crate::generator::ZeroDivisorPolicy;

/// One segment of generation: `count` records with `a < 2^bits_a`, `b < 2^bits_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Number of records drawn from this band
    pub count: usize,

    /// Maximum bit-length of the dividend
    pub bits_a: u64,

    /// Maximum bit-length of the divisor
    pub bits_b: u64,
}

/// The default plan, processed in this order.
pub const DEFAULT_BANDS: [Band; 4] = [
    Band::new(300, 4000, 2000),
    Band::new(100, 10000, 5000),
    Band::new(100, 10000, 5000),
    Band::new(100, 1000, 10),
];

impl Band {
    pub const fn new(count: usize, bits_a: u64, bits_b: u64) -> Self {
        Self { count, bits_a, bits_b }
    }
}

/// Total number of records a plan produces per stream.
pub fn total_records(bands: &[Band]) -> usize {
    bands.iter().map(|band| band.count).sum()
}

/// Check that a plan can be run to completion under `policy`.
pub fn validate_plan(bands: &[Band], policy: ZeroDivisorPolicy) -> Result<()> {
    if bands.is_empty() {
        return Err(BandError::EmptyPlan.into());
    }

    if policy == ZeroDivisorPolicy::Resample {
        if let Some(band) = bands.iter().position(|b| b.bits_b == 0 && b.count > 0) {
            return Err(BandError::ZeroDivisorBits { band }.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_plan_totals() {
        assert_eq!(total_records(&DEFAULT_BANDS), 600);
        assert_eq!(DEFAULT_BANDS[0], Band::new(300, 4000, 2000));
        assert_eq!(DEFAULT_BANDS[3].bits_b, 10);
    }

    #[test]
    fn test_default_plan_is_valid() {
        validate_plan(&DEFAULT_BANDS, ZeroDivisorPolicy::Resample).unwrap();
        validate_plan(&DEFAULT_BANDS, ZeroDivisorPolicy::Fail).unwrap();
    }

    #[test]
    fn test_empty_plan_rejected() {
        let err = validate_plan(&[], ZeroDivisorPolicy::Fail).unwrap_err();
        assert!(matches!(err, Error::Band(BandError::EmptyPlan)));
    }

    #[test]
    fn test_zero_bit_divisor() {
        let plan = [Band::new(5, 64, 32), Band::new(1, 64, 0)];

        let err = validate_plan(&plan, ZeroDivisorPolicy::Resample).unwrap_err();
        assert!(matches!(err, Error::Band(BandError::ZeroDivisorBits { band: 1 })));

        // Failing on the first record is still a well-defined outcome
        validate_plan(&plan, ZeroDivisorPolicy::Fail).unwrap();

        // A band with no records never draws anything
        validate_plan(&[Band::new(0, 64, 0)], ZeroDivisorPolicy::Resample).unwrap();
    }
}
