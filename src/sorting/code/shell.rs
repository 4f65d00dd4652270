//! Shell sort with the halving gap sequence n/2, n/4, ..., 1.

use crate::sorting::{precedes, Order};

/// Sort a copy of `data` with shell sort.
///
/// For each gap, runs an insertion sort over elements `gap` apart: the held
/// value is compared against its gap-spaced predecessors, which are shifted
/// forward while they belong after it.
pub fn shell_sort(data: &[i64], order: Order) -> Vec<i64> {
    let mut v = data.to_vec();
    let n = v.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let held = v[i];
            let mut j = i;

            while j >= gap && precedes(held, v[j - gap], order) {
                v[j] = v[j - gap];
                j -= gap;
            }

            v[j] = held;
        }

        gap /= 2;
    }

    v
}
