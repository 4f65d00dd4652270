//! Quicksort with a Lomuto partition around the last element.
//!
//! Pivot choice is fixed: already sorted or reverse-sorted input degrades to
//! O(n²) comparisons. Recursion always descends into the smaller side and
//! loops over the larger one, which bounds stack depth by O(log n) without
//! changing which partitions are formed.

use crate::sorting::{precedes, Order};

/// Sort a copy of `data` with quicksort.
///
/// # Example
/// ```
/// use sortkit::sorting::{quick_sort, Order};
///
/// let sorted = quick_sort(&[5, 2, 8, 1, 9, 3], Order::Ascending);
/// assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
/// ```
pub fn quick_sort(data: &[i64], order: Order) -> Vec<i64> {
    let mut v = data.to_vec();
    sort_range(&mut v, order);
    v
}

fn sort_range(mut v: &mut [i64], order: Order) {
    while v.len() > 1 {
        let pivot = partition(v, order);
        let (low, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let high = &mut rest[1..];

        if low.len() < high.len() {
            sort_range(low, order);
            v = high;
        } else {
            sort_range(high, order);
            v = low;
        }
    }
}

/// Partition `v` around its last element and return the pivot's final index.
///
/// Elements not ordered after the pivot (`<=` ascending, `>=` descending) end
/// up on the low side.
pub(crate) fn partition(v: &mut [i64], order: Order) -> usize {
    let last = v.len() - 1;
    let pivot = v[last];
    let mut boundary = 0;

    for j in 0..last {
        if !precedes(pivot, v[j], order) {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, last);
    boundary
}
