use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::base_case::insertion_sort;
use crate::error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    FirstElement,
    RandomElement,
    MedianOfThreeRandom,
    MedianOfThreeFixed,
}

/// Benchmark order. The last entry produces the sorted artifact of a session.
pub const ALL_STRATEGIES: [PivotStrategy; 4] = [
    PivotStrategy::FirstElement,
    PivotStrategy::RandomElement,
    PivotStrategy::MedianOfThreeRandom,
    PivotStrategy::MedianOfThreeFixed,
];

impl PivotStrategy {
    pub fn name(self) -> &'static str {
        match self {
            PivotStrategy::FirstElement => "FIRST_ELEMENT",
            PivotStrategy::RandomElement => "RANDOM_ELEMENT",
            PivotStrategy::MedianOfThreeRandom => "MEDIAN_OF_THREE_RANDOM",
            PivotStrategy::MedianOfThreeFixed => "MEDIAN_OF_THREE_FIXED",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        ALL_STRATEGIES
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| SortError::UnknownStrategy(s.to_string()))
    }
}

/// Returns the pivot index in `[start, end]` (inclusive, `end > start`) chosen by `strategy`.
pub fn select_pivot<T: Ord, R: Rng>(
    arr: &[T],
    strategy: PivotStrategy,
    start: usize,
    end: usize,
    rng: &mut R,
) -> usize {
    debug_assert!(start < end && end < arr.len());
    match strategy {
        PivotStrategy::FirstElement => start,
        PivotStrategy::RandomElement => rng.gen_range(start..=end),
        PivotStrategy::MedianOfThreeRandom => {
            // drawn with replacement, duplicates are fine
            let first = rng.gen_range(start..=end);
            let second = rng.gen_range(start..=end);
            let third = rng.gen_range(start..=end);
            median_of_three(arr, first, second, third)
        }
        PivotStrategy::MedianOfThreeFixed => {
            let middle = start + (end - start) / 2;
            median_of_three(arr, start, middle, end)
        }
    }
}

/// Returns whichever of the three indices holds the median value. Ties go to the first
/// candidate (in argument order) that compares equal to the median.
pub fn median_of_three<T: Ord>(arr: &[T], first: usize, second: usize, third: usize) -> usize {
    let mut buf = [&arr[first], &arr[second], &arr[third]];
    insertion_sort(&mut buf);
    let median = buf[1];

    if *median == arr[first] {
        first
    } else if *median == arr[second] {
        second
    } else {
        third
    }
}
