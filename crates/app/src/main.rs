//! divgen: writes `div_test.csv` and `rem_test.csv` into the output directory.
//!
//! Logs go to stderr (filtered by `RUST_LOG`, default `info`); stdout carries
//! only the configuration and summary.

mod config;

use config::Config;
use divgen_core::{metrics::RunStats, Error, Generator, RandomOperands};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(stats) => {
            if config.print_summary {
                stats.print_summary();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, seed = config.seed, "generation failed");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> divgen_core::Result<RunStats> {
    if !config.out_dir.is_dir() {
        return Err(Error::Config(format!(
            "output directory {} does not exist",
            config.out_dir.display()
        )));
    }

    info!(
        seed = config.seed,
        out_dir = %config.out_dir.display(),
        policy = %config.policy,
        "starting generation"
    );

    let mut generator = Generator::new(RandomOperands::from_seed(config.seed)).policy(config.policy);
    let mut stats = generator.run_to_dir(&config.bands, &config.out_dir)?;
    stats.seed = Some(generator.source().seed());

    Ok(stats)
}
