//! # Comparison Sorts
//!
//! Five textbook comparison sorts over machine integers, each parameterized by
//! a sort [`Order`]:
//!
//! - **Bubble**: adjacent swaps, stops after a pass without swaps
//! - **Selection**: moves the extreme of the unsorted remainder into place
//! - **Quick**: Lomuto partition around the last element of each subrange
//! - **Merge**: top-down halving, stable merge through temporary buffers
//! - **Shell**: gap-spaced insertion sort with a halving gap sequence
//!
//! Every routine takes a borrowed slice and returns a freshly allocated,
//! sorted `Vec`; the caller's data is never touched.

pub mod code;
pub mod test;

pub use code::*;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Requested direction of a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// Short command-line token (`asc` / `desc`)
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Order::Ascending),
            "desc" => Ok(Order::Descending),
            _ => Err(s.to_string()),
        }
    }
}

/// Returns true when `a` belongs strictly before `b` under `order`.
///
/// Routines that need the non-strict relation (stable merge, partition
/// placement) use `!precedes(b, a, order)`.
#[inline]
pub fn precedes(a: i64, b: i64, order: Order) -> bool {
    match order {
        Order::Ascending => a < b,
        Order::Descending => a > b,
    }
}

/// Closed set of sort routines known to the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Quick,
    Merge,
    Shell,
}

impl Algorithm {
    /// All algorithms, in dispatch-table order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Shell,
    ];

    /// Dispatch name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Shell => "shell",
        }
    }

    /// The routine implementing this algorithm.
    pub fn function(self) -> SortFn {
        match self {
            Algorithm::Bubble => bubble_sort,
            Algorithm::Selection => selection_sort,
            Algorithm::Quick => quick_sort,
            Algorithm::Merge => merge_sort,
            Algorithm::Shell => shell_sort,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| s.to_string())
    }
}

/// Trait every registered sort routine implements
pub trait SortAlgorithm: Send + Sync {
    /// Dispatch name (e.g., "quick")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Sort a copy of `data` in the requested order.
    fn sort(&self, data: &[i64], order: Order) -> Vec<i64>;

    /// Cross-check against the standard library sort on seeded inputs
    fn verify(&self, seed: u64) -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(seed);

        for input in verification_inputs(&mut rng) {
            for order in [Order::Ascending, Order::Descending] {
                let mut expected = input.clone();
                match order {
                    Order::Ascending => expected.sort(),
                    Order::Descending => expected.sort_by(|a, b| b.cmp(a)),
                }

                let result = self.sort(&input, order);
                if result != expected {
                    return Err(format!(
                        "Algorithm '{}' failed verification ({} order, {} elements)",
                        self.name(),
                        order,
                        input.len()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Inputs used by [`SortAlgorithm::verify`]: edge sizes, presorted runs and
/// random data with and without heavy duplication.
fn verification_inputs(rng: &mut StdRng) -> Vec<Vec<i64>> {
    let mut inputs = vec![
        Vec::new(),
        vec![10],
        vec![2, 2, 2, 2],
        (0..64).collect(),
        (0..64).rev().collect(),
        vec![i64::MIN, i64::MAX, 0, -1, 1, i64::MAX, i64::MIN],
    ];

    // Odd sizes exercise uneven merge halves and shell gaps
    for size in [7, 33, 257, 1023] {
        inputs.push((0..size).map(|_| rng.random_range(-10_000..=10_000)).collect());
        inputs.push((0..size).map(|_| rng.random_range(0..8)).collect());
    }

    inputs
}

pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        Algorithm::Bubble.name()
    }

    fn description(&self) -> &'static str {
        "Adjacent swaps with early exit on a clean pass"
    }

    fn sort(&self, data: &[i64], order: Order) -> Vec<i64> {
        bubble_sort(data, order)
    }
}

pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn name(&self) -> &'static str {
        Algorithm::Selection.name()
    }

    fn description(&self) -> &'static str {
        "Swaps the extreme of the unsorted remainder into place"
    }

    fn sort(&self, data: &[i64], order: Order) -> Vec<i64> {
        selection_sort(data, order)
    }
}

pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn name(&self) -> &'static str {
        Algorithm::Quick.name()
    }

    fn description(&self) -> &'static str {
        "Recursive Lomuto partition, last element as pivot"
    }

    fn sort(&self, data: &[i64], order: Order) -> Vec<i64> {
        quick_sort(data, order)
    }
}

pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn name(&self) -> &'static str {
        Algorithm::Merge.name()
    }

    fn description(&self) -> &'static str {
        "Stable top-down merge sort"
    }

    fn sort(&self, data: &[i64], order: Order) -> Vec<i64> {
        merge_sort(data, order)
    }
}

pub struct ShellSort;

impl SortAlgorithm for ShellSort {
    fn name(&self) -> &'static str {
        Algorithm::Shell.name()
    }

    fn description(&self) -> &'static str {
        "Gap insertion sort, gap halved from n/2"
    }

    fn sort(&self, data: &[i64], order: Order) -> Vec<i64> {
        shell_sort(data, order)
    }
}
