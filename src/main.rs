use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quicksort_pivots::config::seed_from_env;
use quicksort_pivots::report::write_outputs;
use quicksort_pivots::{
    run_session, BenchConfig, OutputPaths, PartitionScheme, PivotStrategy, Result, SortError,
};

/// Times quicksort under four pivot strategies on one random integer list.
///
/// Without arguments a single line `<size> <report> <unsorted> <sorted>` is read from stdin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of random integers to generate
    #[arg(allow_negative_numbers = true)]
    size: Option<i64>,
    /// Timing report destination
    report: Option<PathBuf>,
    /// Destination of the generated, unsorted list
    unsorted: Option<PathBuf>,
    /// Destination of the sorted list
    sorted: Option<PathBuf>,

    /// Seed for list generation and random pivots (falls back to $SEED)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PartitionScheme::Relocate)]
    partition: PartitionScheme,

    /// Strategies to time, comma separated (default: all four)
    #[arg(long = "strategy", value_delimiter = ',')]
    strategies: Vec<PivotStrategy>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<BenchConfig> {
        let mut config = match (self.size, self.report, self.unsorted, self.sorted) {
            (Some(size), Some(report), Some(unsorted), Some(sorted)) => BenchConfig::new(
                size,
                OutputPaths {
                    report,
                    unsorted,
                    sorted,
                },
            ),
            (None, None, None, None) => {
                let mut line = String::new();
                io::stdin().read_line(&mut line)?;
                BenchConfig::parse_line(&line)?
            }
            _ => {
                return Err(SortError::InvalidCommand(
                    "expected all of <size> <report> <unsorted> <sorted> or none".to_string(),
                ))
            }
        };
        config.seed = self.seed.or_else(seed_from_env);
        config.scheme = self.partition;
        if !self.strategies.is_empty() {
            config.strategies = self.strategies;
        }
        Ok(config)
    }
}

fn run(config: BenchConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => {
            info!("Seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let session = run_session(config.size, config.scheme, &config.strategies, &mut rng)?;
    write_outputs(&config.outputs, &session)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.into_config().and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
