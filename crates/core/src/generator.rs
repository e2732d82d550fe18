//! The generation loop.
//!
//! For every band, in plan order, the generator performs `count`
//! draw-compute-emit cycles: draw `(a, b)`, ask the oracle for `(q, r)`, then
//! append `a,b,q` to the division stream and `a,b,r` to the remainder stream.
//! Line `i` of both streams therefore always shares the same operands.
//!
//! # Zero divisors
//!
//! Narrow divisor bands can draw `b = 0`. What happens then is decided by
//! [`ZeroDivisorPolicy`]: redraw the divisor, or abort the run.

use crate::band::{validate_plan, Band};
use crate::error::{Error, Result};
use crate::metrics::RunStats;
use crate::operand::{next_pair, OperandPair, OperandSource};
use crate::oracle::{BigUintOracle, Oracle};
use crate::record::{Operation, RecordStream};
use num_traits::Zero;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// What to do when a drawn divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDivisorPolicy {
    /// Redraw `b` from the same band until it is non-zero
    #[default]
    Resample,
    /// Abort the run with [`Error::ZeroDivisor`]
    Fail,
}

impl std::str::FromStr for ZeroDivisorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "resample" => Ok(ZeroDivisorPolicy::Resample),
            "fail" => Ok(ZeroDivisorPolicy::Fail),
            other => Err(format!("unknown zero-divisor policy: {} (expected resample or fail)", other)),
        }
    }
}

impl std::fmt::Display for ZeroDivisorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroDivisorPolicy::Resample => write!(f, "resample"),
            ZeroDivisorPolicy::Fail => write!(f, "fail"),
        }
    }
}

/// Draws operands and records their quotient and remainder.
pub struct Generator<S, O = BigUintOracle> {
    source: S,
    oracle: O,
    policy: ZeroDivisorPolicy,
}

impl<S: OperandSource> Generator<S> {
    /// Create a generator using the `num-bigint` oracle.
    pub fn new(source: S) -> Self {
        Self::with_oracle(source, BigUintOracle)
    }
}

impl<S: OperandSource, O: Oracle> Generator<S, O> {
    pub fn with_oracle(source: S, oracle: O) -> Self {
        Self {
            source,
            oracle,
            policy: ZeroDivisorPolicy::default(),
        }
    }

    /// Set the zero-divisor policy.
    pub fn policy(mut self, policy: ZeroDivisorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draw the pair for record `record` of band `band_idx`, applying the policy.
    fn draw(&mut self, band: &Band, band_idx: usize, record: usize, stats: &mut RunStats) -> Result<OperandPair> {
        let mut pair = next_pair(&mut self.source, band);

        while pair.b.is_zero() {
            match self.policy {
                ZeroDivisorPolicy::Fail => {
                    return Err(Error::ZeroDivisor { band: band_idx, record });
                }
                ZeroDivisorPolicy::Resample => {
                    debug!(band = band_idx, record, "zero divisor drawn, resampling");
                    stats.divisors_resampled += 1;
                    pair.b = self.source.next_operand(band.bits_b);
                }
            }
        }

        Ok(pair)
    }

    /// Generate every band of `bands` into the two streams.
    ///
    /// The streams are not flushed; call [`RecordStream::finish`] afterwards.
    pub fn run<D: Write, R: Write>(
        &mut self,
        bands: &[Band],
        div: &mut RecordStream<D>,
        rem: &mut RecordStream<R>,
    ) -> Result<RunStats> {
        validate_plan(bands, self.policy)?;

        let mut stats = RunStats::new(bands.len());

        for (band_idx, band) in bands.iter().enumerate() {
            debug!(
                band = band_idx,
                count = band.count,
                bits_a = band.bits_a,
                bits_b = band.bits_b,
                "generating band"
            );

            for record in 0..band.count {
                let OperandPair { a, b } = self.draw(band, band_idx, record, &mut stats)?;
                let (q, r) = self.oracle.divide(&a, &b)?;

                let a = self.oracle.to_decimal(&a);
                let b = self.oracle.to_decimal(&b);
                div.emit(&a, &b, &self.oracle.to_decimal(&q))?;
                rem.emit(&a, &b, &self.oracle.to_decimal(&r))?;

                stats.band_records[band_idx] += 1;
                stats.records += 1;
            }
        }

        stats.div_bytes = div.bytes();
        stats.rem_bytes = rem.bytes();
        stats.complete();

        info!(
            records = stats.records,
            resampled = stats.divisors_resampled,
            elapsed_ms = stats.duration().as_millis() as u64,
            "generation complete"
        );

        Ok(stats)
    }

    /// Create `div_test.csv` and `rem_test.csv` in `dir` and generate into them.
    pub fn run_to_dir(&mut self, bands: &[Band], dir: &Path) -> Result<RunStats> {
        let div_path = dir.join(Operation::Div.file_name());
        let rem_path = dir.join(Operation::Rem.file_name());

        let mut div = RecordStream::create(Operation::Div, &div_path)?;
        let mut rem = RecordStream::create(Operation::Rem, &rem_path)?;
        debug!(div = %div_path.display(), rem = %rem_path.display(), "opened output streams");

        let stats = self.run(bands, &mut div, &mut rem)?;

        div.finish()?;
        rem.finish()?;

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;
    use crate::operand::ScriptedOperands;

    fn run_scripted(
        values: &[u32],
        bands: &[Band],
        policy: ZeroDivisorPolicy,
    ) -> (Result<RunStats>, String, String) {
        let mut generator = Generator::new(ScriptedOperands::new(values.iter().copied())).policy(policy);
        let mut div = RecordStream::new(Operation::Div, Vec::new());
        let mut rem = RecordStream::new(Operation::Rem, Vec::new());

        let result = generator.run(bands, &mut div, &mut rem);

        let div = String::from_utf8(div.finish().unwrap()).unwrap();
        let rem = String::from_utf8(rem.finish().unwrap()).unwrap();
        (result, div, rem)
    }

    #[test]
    fn test_single_record() {
        let (result, div, rem) = run_scripted(&[17, 5], &[Band::new(1, 8, 4)], ZeroDivisorPolicy::Fail);

        let stats = result.unwrap();
        assert_eq!(stats.records, 1);
        assert_eq!(div, "17,5,3\n");
        assert_eq!(rem, "17,5,2\n");
    }

    #[test]
    fn test_zero_divisor_fails() {
        let (result, div, rem) = run_scripted(&[42, 0], &[Band::new(1, 8, 4)], ZeroDivisorPolicy::Fail);

        let err = result.unwrap_err();
        assert!(matches!(err, Error::ZeroDivisor { band: 0, record: 0 }));
        assert!(div.is_empty());
        assert!(rem.is_empty());
    }

    #[test]
    fn test_zero_divisor_fail_reports_position() {
        let bands = [Band::new(2, 8, 4), Band::new(3, 8, 4)];
        // Band 0: (7,2) (9,4). Band 1: (5,1) (6,0)
        let (result, div, _) = run_scripted(&[7, 2, 9, 4, 5, 1, 6, 0], &bands, ZeroDivisorPolicy::Fail);

        assert!(matches!(result.unwrap_err(), Error::ZeroDivisor { band: 1, record: 1 }));
        assert_eq!(div, "7,2,3\n9,4,2\n5,1,5\n");
    }

    #[test]
    fn test_zero_divisor_resampled() {
        let (result, div, rem) = run_scripted(&[42, 0, 5], &[Band::new(1, 8, 4)], ZeroDivisorPolicy::Resample);

        let stats = result.unwrap();
        assert_eq!(stats.divisors_resampled, 1);
        assert_eq!(div, "42,5,8\n");
        assert_eq!(rem, "42,5,2\n");
    }

    #[test]
    fn test_band_counts() {
        let bands = [Band::new(3, 8, 4), Band::new(2, 8, 4)];
        let (result, div, rem) = run_scripted(&[9, 2], &bands, ZeroDivisorPolicy::Fail);

        let stats = result.unwrap();
        assert_eq!(stats.band_records, vec![3, 2]);
        assert_eq!(stats.records, 5);
        assert_eq!(div.lines().count(), 5);
        assert_eq!(rem.lines().count(), 5);
        assert_eq!(stats.div_bytes, div.len() as u64);
        assert_eq!(stats.rem_bytes, rem.len() as u64);
    }

    #[test]
    fn test_invalid_plan_writes_nothing() {
        let (result, div, _) = run_scripted(&[1, 1], &[Band::new(1, 8, 0)], ZeroDivisorPolicy::Resample);
        assert!(matches!(result.unwrap_err(), Error::Band(_)));
        assert!(div.is_empty());
    }

    /// An oracle that refuses everything, to check oracle errors propagate.
    struct RefusingOracle;

    impl Oracle for RefusingOracle {
        fn divide(
            &self,
            _a: &num_bigint::BigUint,
            _b: &num_bigint::BigUint,
        ) -> std::result::Result<(num_bigint::BigUint, num_bigint::BigUint), OracleError> {
            Err(OracleError::DivisionByZero)
        }

        fn to_decimal(&self, n: &num_bigint::BigUint) -> String {
            n.to_string()
        }
    }

    #[test]
    fn test_oracle_error_propagates() {
        let mut generator = Generator::with_oracle(ScriptedOperands::new([3u32, 1]), RefusingOracle);
        let mut div = RecordStream::new(Operation::Div, Vec::new());
        let mut rem = RecordStream::new(Operation::Rem, Vec::new());

        let err = generator.run(&[Band::new(1, 8, 4)], &mut div, &mut rem).unwrap_err();
        assert!(matches!(err, Error::Oracle(OracleError::DivisionByZero)));
        assert_eq!(div.lines(), 0);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("resample".parse::<ZeroDivisorPolicy>().unwrap(), ZeroDivisorPolicy::Resample);
        assert_eq!("fail".parse::<ZeroDivisorPolicy>().unwrap(), ZeroDivisorPolicy::Fail);
        assert!("skip".parse::<ZeroDivisorPolicy>().is_err());
        assert_eq!(ZeroDivisorPolicy::default().to_string(), "resample");
    }
}
