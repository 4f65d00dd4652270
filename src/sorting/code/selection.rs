//! Selection sort.

use crate::sorting::{precedes, Order};

/// Sort a copy of `data` by selecting the minimum (ascending) or maximum
/// (descending) of the unsorted remainder for each position.
///
/// Ties keep the first occurrence as the extreme. Always performs
/// n(n-1)/2 comparisons regardless of input shape.
pub fn selection_sort(data: &[i64], order: Order) -> Vec<i64> {
    let mut v = data.to_vec();
    let n = v.len();

    for i in 0..n {
        let mut extreme = i;
        for j in (i + 1)..n {
            if precedes(v[j], v[extreme], order) {
                extreme = j;
            }
        }

        if extreme != i {
            v.swap(i, extreme);
        }
    }

    v
}
