//! Error types for the divgen system.
//!
//! All operations return structured errors rather than panicking. A failure
//! anywhere in a run is fatal: it propagates to the caller unchanged and the
//! output streams are left as they were last flushed.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Band: the generation plan is malformed
/// - Oracle: the arithmetic oracle refused an operation
/// - ZeroDivisor: a zero divisor was drawn under the failing policy
/// - I/O: creating or writing an output stream
#[derive(Debug, Error)]
pub enum Error {
    /// The band plan cannot be generated
    #[error("band error: {0}")]
    Band(#[from] BandError),

    /// Arithmetic oracle error (e.g., division by zero)
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// A zero divisor was drawn and the policy says to abort
    #[error("zero divisor drawn in band {band} at record {record}")]
    ZeroDivisor { band: usize, record: usize },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Band plan errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BandError {
    /// No bands to generate
    #[error("band plan is empty")]
    EmptyPlan,

    /// A 0-bit divisor is always zero, so resampling would never finish
    #[error("band {band} draws 0-bit divisors, which can never be resampled to non-zero")]
    ZeroDivisorBits { band: usize },
}

/// Arithmetic oracle errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OracleError {
    /// Divisor was zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
