use clap::ValueEnum;

/// How a sub-range is rearranged around its pivot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, ValueEnum)]
pub enum PartitionScheme {
    /// Relocates misplaced elements one at a time to the far end of the range, see [`balance`].
    #[default]
    Relocate,
    /// Swap-based Lomuto partition.
    Lomuto,
}

impl PartitionScheme {
    pub fn partition<T: Ord>(self, arr: &mut [T], pivot: usize) -> usize {
        match self {
            PartitionScheme::Relocate => balance(arr, pivot),
            PartitionScheme::Lomuto => lomuto(arr, pivot),
        }
    }
}

/// Rearranges `arr` around the element at `pivot` and returns the pivot's final index.
///
/// Everything left of the pivot that is greater moves to the back of the range, then
/// everything right of the pivot that is smaller moves to the front. A move is a rotation
/// by one, so the pivot slides one slot towards the vacated side each time and the scan
/// position is re-examined. Equal elements stay where they are.
pub fn balance<T: Ord>(arr: &mut [T], mut pivot: usize) -> usize {
    debug_assert!(pivot < arr.len());
    let end = arr.len() - 1;

    let mut i = 0;
    while i < pivot {
        if arr[i] > arr[pivot] {
            arr[i..=end].rotate_left(1);
            pivot -= 1;
        } else {
            i += 1;
        }
    }

    // runs through `end` inclusive, otherwise a smaller last element survives
    // whenever the left scan moved nothing
    let mut i = pivot + 1;
    while i <= end {
        if arr[i] < arr[pivot] {
            arr[..=i].rotate_right(1);
            pivot += 1;
        } else {
            i += 1;
        }
    }

    pivot
}

/// Swaps the pivot to the end, moves every smaller element in front of a store index and
/// swaps the pivot back to that index, which is returned.
pub fn lomuto<T: Ord>(arr: &mut [T], pivot: usize) -> usize {
    debug_assert!(pivot < arr.len());
    let last = arr.len() - 1;
    arr.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        if arr[i] < arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}
