//! Bubble sort with early termination.

use crate::sorting::{precedes, Order};

/// Sort a copy of `data` by repeatedly swapping out-of-order neighbours.
///
/// Each pass settles the largest remaining element (in `order`) at the end of
/// the unsorted prefix. A pass without swaps ends the sort, so already-sorted
/// input costs a single scan.
///
/// # Example
/// ```
/// use sortkit::sorting::{bubble_sort, Order};
///
/// assert_eq!(bubble_sort(&[3, 1, 2], Order::Ascending), vec![1, 2, 3]);
/// ```
pub fn bubble_sort(data: &[i64], order: Order) -> Vec<i64> {
    let mut v = data.to_vec();
    let mut end = v.len();

    while end > 1 {
        let mut swapped = false;

        for j in 0..end - 1 {
            if precedes(v[j + 1], v[j], order) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        end -= 1;
    }

    v
}
