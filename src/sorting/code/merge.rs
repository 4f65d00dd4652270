//! Top-down merge sort.

use crate::sorting::{precedes, Order};

/// Sort a copy of `data` with a stable merge sort.
///
/// Guaranteed O(n log n) comparisons. A single scratch buffer of length n is
/// reused by every merge.
pub fn merge_sort(data: &[i64], order: Order) -> Vec<i64> {
    let mut v = data.to_vec();
    let mut scratch = Vec::with_capacity(v.len());
    sort_range(&mut v, order, &mut scratch);
    v
}

fn sort_range(v: &mut [i64], order: Order, scratch: &mut Vec<i64>) {
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Left half takes the extra element of an odd-length range
    let mid = (len + 1) / 2;
    sort_range(&mut v[..mid], order, scratch);
    sort_range(&mut v[mid..], order, scratch);
    merge(v, mid, order, scratch);
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]` back into `v`.
///
/// On ties the left run is drawn first, which keeps equal elements in their
/// original relative order.
pub(crate) fn merge(v: &mut [i64], mid: usize, order: Order, scratch: &mut Vec<i64>) {
    scratch.clear();
    scratch.extend_from_slice(v);
    let (left, right) = scratch.split_at(mid);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if precedes(right[j], left[i], order) {
            v[k] = right[j];
            j += 1;
        } else {
            v[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    // At most one of these is non-empty
    for &x in &left[i..] {
        v[k] = x;
        k += 1;
    }
    for &x in &right[j..] {
        v[k] = x;
        k += 1;
    }
}
