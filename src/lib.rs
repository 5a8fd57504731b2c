pub mod base_case;
pub mod config;
pub mod error;
pub mod generate;
pub mod partition;
pub mod pivot;
pub mod report;
pub mod session;
pub mod sort;
pub mod sorter;

pub use base_case::insertion_sort;
pub use config::{BenchConfig, OutputPaths, THRESHOLD};
pub use error::{Result, SortError};
pub use generate::{duplicate, generate_random_list};
pub use partition::{balance, lomuto, PartitionScheme};
pub use pivot::{median_of_three, select_pivot, PivotStrategy, ALL_STRATEGIES};
pub use session::{run_session, Session, StrategyTiming};
pub use sort::{quick_sort, timed_quick_sort};
pub use sorter::{QuickSorter, SortStats};
