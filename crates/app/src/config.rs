//! Configuration for the divgen application.
//!
//! The tool works with zero arguments: it writes both streams into the current
//! directory using the default band plan and a time-based seed. The resolved
//! seed is always reported so any run can be reproduced with `--seed`.

use clap::Parser;
use divgen_core::{operand::time_seed, Band, ZeroDivisorPolicy, DEFAULT_BANDS};
use std::ffi::OsString;
use std::path::PathBuf;

/// Generate big-integer division and remainder test vectors.
#[derive(Parser, Debug)]
#[command(name = "divgen", version, about, long_about = None)]
struct Args {
    /// Random seed for a deterministic run (default: wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory where div_test.csv and rem_test.csv are created
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// What to do when a zero divisor is drawn: resample or fail
    #[arg(long, default_value_t = ZeroDivisorPolicy::Resample)]
    on_zero: ZeroDivisorPolicy,

    /// Print resolved configuration
    #[arg(long)]
    print_config: bool,

    /// Don't print the generation summary
    #[arg(long)]
    quiet: bool,
}

/// Complete configuration for a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed of the operand source
    pub seed: u64,

    /// Output directory
    pub out_dir: PathBuf,

    /// Zero-divisor policy
    pub policy: ZeroDivisorPolicy,

    /// Bands, in generation order
    pub bands: Vec<Band>,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the summary
    pub print_summary: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (including the program name).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;

        Ok(Config {
            seed: args.seed.unwrap_or_else(time_seed),
            out_dir: args.out_dir,
            policy: args.on_zero,
            bands: DEFAULT_BANDS.to_vec(),
            print_config: args.print_config,
            print_summary: !args.quiet,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        println!("Output directory: {}", self.out_dir.display());
        println!("Zero divisors: {}", self.policy);
        println!();
        println!("=== Bands ===");
        for (i, band) in self.bands.iter().enumerate() {
            println!(
                "Band {}: {} records, a < 2^{}, b < 2^{}",
                i + 1,
                band.count,
                band.bits_a,
                band.bits_b
            );
        }
        println!();
    }
}
