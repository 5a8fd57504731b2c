/// Sorts `arr` in non-decreasing order.
///
/// Element `i` is compared against the already sorted prefix from the right until the
/// first position whose left neighbour is not greater, then relocated there in one
/// rotation. Elements outside `arr` are never touched, so callers pass the sub-range.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[i] < arr[j - 1] {
            j -= 1;
        }
        arr[j..=i].rotate_right(1);
    }
}
