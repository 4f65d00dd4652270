//! Sort routine implementations.
//!
//! Each routine copies its input once and sorts the copy in place.

mod bubble;
pub(crate) mod merge;
pub(crate) mod quick;
mod selection;
mod shell;

pub use bubble::bubble_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;

use super::Order;

/// Function signature shared by all routines
pub type SortFn = fn(&[i64], Order) -> Vec<i64>;
