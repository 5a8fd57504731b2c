use std::cmp::max;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::Rng;

use crate::base_case::insertion_sort;
use crate::error::{Result, SortError};
use crate::pivot::{select_pivot, PivotStrategy};
use crate::sorter::{QuickSorter, SortStats, Task};

impl<R: Rng> QuickSorter<R> {
    /// Sorts `arr` in place and returns the counters of this call.
    ///
    /// Sub-ranges are kept on an explicit stack instead of the call stack, so an
    /// adversarial input (sorted data under `FirstElement`) costs heap, not stack depth.
    /// The left sub-range is always finished before the right one.
    pub fn sort<T: Ord>(&mut self, arr: &mut [T]) -> SortStats {
        self.stats = SortStats::default();
        let mut pending: Vec<Task> = vec![Task::new(0..arr.len())];

        while let Some(task) = pending.pop() {
            self.stats.max_pending = max(self.stats.max_pending, pending.len() + 1);
            let start = task.range.start;
            let slice = &mut arr[task.range.clone()];

            if task.is_base_case() {
                trace!("Base case: {:?}", task.range);
                insertion_sort(slice);
                self.stats.base_cases += 1;
                continue;
            }

            let end = slice.len() - 1;
            let pivot = select_pivot(slice, self.strategy, 0, end, &mut self.rng);
            let pivot = self.scheme.partition(slice, pivot);
            self.stats.partitions += 1;
            trace!("Partitioned {:?} at {}", task.range, start + pivot);

            // right first so the left sub-range is popped next
            let right = Task::new(start + pivot + 1..task.range.end);
            let left = Task::new(start..start + pivot);
            if right.range.len() > 1 {
                pending.push(right);
            }
            if left.range.len() > 1 {
                pending.push(left);
            }
        }

        debug!("{} sorted {} elements: {}", self.strategy, arr.len(), self.stats);
        self.stats
    }

    /// Sorts `arr` in place and returns the wall-clock time of the whole sort.
    pub fn timed_sort<T: Ord>(&mut self, arr: &mut [T]) -> Duration {
        let start = Instant::now();
        self.sort(arr);
        start.elapsed()
    }
}

/// Sorts `arr` in place with `strategy`, drawing random pivots from entropy.
pub fn quick_sort<T: Ord>(arr: &mut [T], strategy: PivotStrategy) {
    QuickSorter::new(strategy).sort(arr);
}

/// Timed entry point for callers whose sequence or strategy may be absent.
///
/// Fails with [`SortError::NullInput`] before touching anything if either is missing.
pub fn timed_quick_sort<T: Ord>(
    arr: Option<&mut [T]>,
    strategy: Option<PivotStrategy>,
) -> Result<Duration> {
    let arr = arr.ok_or(SortError::NullInput("sequence"))?;
    let strategy = strategy.ok_or(SortError::NullInput("pivot strategy"))?;
    Ok(QuickSorter::new(strategy).timed_sort(arr))
}
