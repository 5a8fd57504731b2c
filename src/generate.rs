use rand::Rng;

use crate::error::{Result, SortError};

/// Generates `size` random integers, each with a random sign and a magnitude
/// uniform in `[0, i32::MAX)`.
pub fn generate_random_list<R: Rng>(size: i64, rng: &mut R) -> Result<Vec<i32>> {
    if size < 0 {
        return Err(SortError::InvalidSize(size));
    }
    let size = usize::try_from(size).map_err(|_| SortError::InvalidSize(size))?;

    Ok((0..size)
        .map(|_| {
            let magnitude = rng.gen_range(0..i32::MAX);
            if rng.gen_bool(0.5) {
                -magnitude
            } else {
                magnitude
            }
        })
        .collect())
}

/// Independent copy of `arr`; mutating one never shows in the other.
pub fn duplicate<T: Clone>(arr: &[T]) -> Vec<T> {
    arr.to_vec()
}
