//! Run statistics.
//!
//! Counters are updated by the generation loop as records are emitted. The
//! struct is not thread-safe; the generator is single-threaded.

use std::time::{Duration, Instant};

/// Counts and timing for one generation run.
#[derive(Debug, Clone)]
pub struct RunStats {
    // === Timing ===
    /// When generation started
    pub start_time: Instant,

    /// When generation ended (set on completion)
    pub end_time: Option<Instant>,

    /// Seed of the operand source, when known
    pub seed: Option<u64>,

    // === Records ===
    /// Records emitted per band, in plan order
    pub band_records: Vec<u64>,

    /// Records emitted to each stream
    pub records: u64,

    /// Zero divisors redrawn under the resampling policy
    pub divisors_resampled: u64,

    // === Output ===
    /// Bytes written to the division stream
    pub div_bytes: u64,

    /// Bytes written to the remainder stream
    pub rem_bytes: u64,
}

impl RunStats {
    /// Create stats for a plan of `bands` bands, start time set to now.
    pub fn new(bands: usize) -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            seed: None,
            band_records: vec![0; bands],
            records: 0,
            divisors_resampled: 0,
            div_bytes: 0,
            rem_bytes: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Records per second across the run.
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.duration().as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.records as f64 / secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Generation Summary ===");
        match self.seed {
            Some(seed) => println!("Seed: {}", seed),
            None => println!("Seed: (unknown)"),
        }
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Bands ===");
        for (i, count) in self.band_records.iter().enumerate() {
            println!("Band {}: {} records", i + 1, count);
        }
        println!("Divisors resampled: {}", self.divisors_resampled);
        println!();

        println!("=== Output ===");
        println!("Records per stream: {}", self.records);
        println!("div stream: {} bytes ({:.2} MiB)", self.div_bytes, self.div_bytes as f64 / 1024.0 / 1024.0);
        println!("rem stream: {} bytes ({:.2} MiB)", self.rem_bytes, self.rem_bytes as f64 / 1024.0 / 1024.0);
        println!("Rate: {:.1} records/s", self.records_per_sec());
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        let bands = self
            .band_records
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "duration_ms={}\n\
             records={}\n\
             band_records={}\n\
             divisors_resampled={}\n\
             div_bytes={}\n\
             rem_bytes={}\n",
            self.duration().as_millis(),
            self.records,
            bands,
            self.divisors_resampled,
            self.div_bytes,
            self.rem_bytes,
        )
    }
}
