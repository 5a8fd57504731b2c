use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SortError};
use crate::generate::{duplicate, generate_random_list};
use crate::partition::PartitionScheme;
use crate::pivot::PivotStrategy;
use crate::sorter::{QuickSorter, SortStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyTiming {
    pub strategy: PivotStrategy,
    pub elapsed: Duration,
    pub stats: SortStats,
}

/// Outcome of sorting one generated list under every pivot strategy.
#[derive(Debug, Clone)]
pub struct Session {
    pub unsorted: Vec<i32>,
    /// Output of the last strategy that ran.
    pub sorted: Vec<i32>,
    pub timings: Vec<StrategyTiming>,
}

/// Generates `size` random integers and times a sort of an independent copy under
/// each of `strategies`, in order. Sorters are seeded from `rng`, so a seeded `rng`
/// repeats the whole session.
pub fn run_session<R: Rng>(
    size: i64,
    scheme: PartitionScheme,
    strategies: &[PivotStrategy],
    rng: &mut R,
) -> Result<Session> {
    if strategies.is_empty() {
        return Err(SortError::NullInput("pivot strategy"));
    }
    let unsorted = generate_random_list(size, rng)?;
    info!("Generated {} elements", unsorted.len());

    let mut timings = Vec::with_capacity(strategies.len());
    let mut sorted: Option<Vec<i32>> = None;

    for &strategy in strategies {
        let mut copy = duplicate(&unsorted);
        let mut sorter =
            QuickSorter::with_rng(strategy, StdRng::seed_from_u64(rng.gen())).with_scheme(scheme);
        let elapsed = sorter.timed_sort(&mut copy);
        info!("{}: {:?} ({})", strategy, elapsed, sorter.stats);

        if let Some(previous) = &sorted {
            if *previous != copy {
                return Err(SortError::Diverged { strategy });
            }
        }
        debug!("{} agrees with previous strategies", strategy);

        timings.push(StrategyTiming {
            strategy,
            elapsed,
            stats: sorter.stats,
        });
        sorted = Some(copy);
    }

    Ok(Session {
        unsorted,
        sorted: sorted.unwrap_or_default(),
        timings,
    })
}
