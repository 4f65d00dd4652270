//! # Sortkit
//!
//! Textbook comparison sorts over integers, selectable by name, with a small
//! CLI that sorts standard input.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod registry;
pub mod sorting;
pub mod tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::SortError;
    pub use crate::registry::{build_registry, SortFactory};
    pub use crate::sorting::{precedes, Algorithm, Order, SortAlgorithm};
}
