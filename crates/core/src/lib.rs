//! divgen-core: randomized big-integer division test vector generation
//!
//! This library produces test records for validating an arbitrary-precision
//! division implementation:
//! - Draws random non-negative operand pairs across fixed bit-length bands
//! - Computes exact quotient and remainder with a trusted oracle
//! - Streams `a,b,result` records into a division and a remainder stream
//!
//! # Architecture
//!
//! - `band`: Bit-length bands and the default plan
//! - `operand`: Seeded operand sources
//! - `oracle`: Exact division and decimal rendering over `num-bigint`
//! - `record`: Buffered record streams
//! - `generator`: The draw-compute-emit loop
//! - `metrics`: Run statistics

pub mod band;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod operand;
pub mod oracle;
pub mod record;

// Re-export commonly used types
pub use band::{Band, DEFAULT_BANDS};
pub use error::{Error, Result};
pub use generator::{Generator, ZeroDivisorPolicy};
pub use operand::{OperandSource, RandomOperands};
pub use oracle::{BigUintOracle, Oracle};
pub use record::{Operation, RecordStream};
