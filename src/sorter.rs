use std::fmt;
use std::fmt::Display;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::is_base_case;
use crate::partition::PartitionScheme;
use crate::pivot::PivotStrategy;

/// A pending sub-range of the sequence being sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub range: Range<usize>,
}

impl Task {
    pub fn new(range: Range<usize>) -> Task {
        Task { range }
    }

    pub fn is_base_case(&self) -> bool {
        is_base_case(self.range.len())
    }
}

/// Counters collected over one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub partitions: usize,
    pub base_cases: usize,
    /// Largest number of sub-ranges waiting on the work stack at once.
    pub max_pending: usize,
}

impl Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "partitions={} base_cases={} max_pending={}",
            self.partitions, self.base_cases, self.max_pending
        )
    }
}

/// Hybrid quicksort/insertion sort with a fixed pivot strategy and an injected
/// random source.
#[derive(Debug)]
pub struct QuickSorter<R> {
    pub strategy: PivotStrategy,
    pub scheme: PartitionScheme,
    pub rng: R,
    pub stats: SortStats,
}

impl QuickSorter<StdRng> {
    pub fn new(strategy: PivotStrategy) -> QuickSorter<StdRng> {
        QuickSorter::with_rng(strategy, StdRng::from_entropy())
    }

    pub fn seeded(strategy: PivotStrategy, seed: u64) -> QuickSorter<StdRng> {
        QuickSorter::with_rng(strategy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuickSorter<R> {
    pub fn with_rng(strategy: PivotStrategy, rng: R) -> QuickSorter<R> {
        QuickSorter {
            strategy,
            scheme: PartitionScheme::default(),
            rng,
            stats: SortStats::default(),
        }
    }

    pub fn with_scheme(mut self, scheme: PartitionScheme) -> QuickSorter<R> {
        self.scheme = scheme;
        self
    }
}
