//! Record streams.
//!
//! Each stream holds one operation's test records, one per line:
//!
//! ```text
//! <a>,<b>,<result>\n
//! ```
//!
//! All fields are canonical decimal strings, so no escaping is needed. There
//! is no header row and no trailing delimiter.

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Which result a stream records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Quotient `a / b`
    Div,
    /// Remainder `a % b`
    Rem,
}

impl Operation {
    /// Default output file name for this operation.
    pub fn file_name(self) -> &'static str {
        match self {
            Operation::Div => "div_test.csv",
            Operation::Rem => "rem_test.csv",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Div => write!(f, "div"),
            Operation::Rem => write!(f, "rem"),
        }
    }
}

/// An append-only, buffered stream of test records.
pub struct RecordStream<W: Write> {
    operation: Operation,
    writer: BufWriter<W>,
    lines: u64,
    bytes: u64,
}

impl RecordStream<File> {
    /// Create (or truncate) `path` and stream records for `operation` into it.
    pub fn create(operation: Operation, path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(operation, file))
    }
}

impl<W: Write> RecordStream<W> {
    /// Wrap an arbitrary writer.
    pub fn new(operation: Operation, inner: W) -> Self {
        Self {
            operation,
            writer: BufWriter::new(inner),
            lines: 0,
            bytes: 0,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Append one `a,b,value` line.
    pub fn emit(&mut self, a: &str, b: &str, value: &str) -> Result<()> {
        writeln!(self.writer, "{},{},{}", a, b, value)?;
        self.lines += 1;
        self.bytes += (a.len() + b.len() + value.len() + 3) as u64;
        Ok(())
    }

    /// Records written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Bytes written so far, including separators and newlines.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Flush buffered records and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        let mut inner = self.writer.into_inner().map_err(|e| e.into_error())?;
        inner.flush()?;
        Ok(inner)
    }
}
