use std::env;
use std::path::PathBuf;

use log::info;
use rand::{thread_rng, Rng};

use crate::error::{Result, SortError};
use crate::partition::PartitionScheme;
use crate::pivot::{PivotStrategy, ALL_STRATEGIES};

/// Largest index span (`end - start`) that is handed to insertion sort instead of
/// being partitioned. A span of 20 means sub-ranges of up to 21 elements.
pub const THRESHOLD: usize = 20;

const _: () = {
    assert!(THRESHOLD >= 2, "median of three needs at least 3 elements per partitioned range");
};

/// `end - start <= THRESHOLD`, expressed on the length of the sub-range.
pub const fn is_base_case(len: usize) -> bool {
    len <= THRESHOLD + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub report: PathBuf,
    pub unsorted: PathBuf,
    pub sorted: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub size: i64,
    pub outputs: OutputPaths,
    pub seed: Option<u64>,
    pub scheme: PartitionScheme,
    /// Strategies to time, in run order.
    pub strategies: Vec<PivotStrategy>,
}

impl BenchConfig {
    pub fn new(size: i64, outputs: OutputPaths) -> BenchConfig {
        BenchConfig {
            size,
            outputs,
            seed: None,
            scheme: PartitionScheme::default(),
            strategies: ALL_STRATEGIES.to_vec(),
        }
    }

    /// Parses the interactive form `<size> <report> <unsorted> <sorted>`,
    /// e.g. `100 report.txt unsorted.txt sorted.txt`.
    pub fn parse_line(line: &str) -> Result<BenchConfig> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[size, report, unsorted, sorted] = fields.as_slice() else {
            return Err(SortError::InvalidCommand(format!(
                "expected `<size> <report> <unsorted> <sorted>`, got {:?}",
                line.trim()
            )));
        };
        let size = size
            .parse::<i64>()
            .map_err(|e| SortError::InvalidCommand(format!("size {size:?}: {e}")))?;

        Ok(BenchConfig::new(
            size,
            OutputPaths {
                report: report.into(),
                unsorted: unsorted.into(),
                sorted: sorted.into(),
            },
        ))
    }
}

/// Resolves the seed for a run when none was passed explicitly.
///
/// `SEED` pins a seed, otherwise `RANDOMIZE_SEED=true` draws a fresh one (and logs it so
/// the run can be repeated). Without either the run stays unseeded.
pub fn seed_from_env() -> Option<u64> {
    resolve_seed(env::var("SEED").ok().as_deref(), env::var("RANDOMIZE_SEED").ok().as_deref())
}

fn resolve_seed(seed: Option<&str>, randomize: Option<&str>) -> Option<u64> {
    if let Some(seed) = seed.and_then(|s| s.parse::<u64>().ok()) {
        return Some(seed);
    }

    if randomize == Some("true") {
        let seed: u64 = thread_rng().gen_range(0..u64::MAX);
        info!("Randomized seed: {}", seed);
        return Some(seed);
    }

    None
}
