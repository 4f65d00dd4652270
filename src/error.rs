//! Error types for dispatch, input parsing and command-line usage.

use thiserror::Error;

/// Errors raised by the sort dispatcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("Unknown algorithm: {name}. Choose from: {}", .supported.join(", "))]
    UnknownAlgorithm {
        name: String,
        supported: Vec<&'static str>,
    },

    #[error("List size mismatch: provided {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Input list must only contain integer data types (element {index}: '{token}')")]
    NotAnInteger { index: usize, token: String },
}

/// Errors raised while reading the integer sequence.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input is empty.")]
    Empty,

    #[error("Input must be space-separated integers only (found '{token}').")]
    NotAnInteger { token: String },

    #[error("Error reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Command-line usage errors.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("expected 2 arguments (algorithm, order), got {0}")]
    ArgumentCount(usize),

    #[error("Invalid order '{0}'. Must be 'asc' or 'desc'.")]
    InvalidOrder(String),

    #[error(transparent)]
    Clap(#[from] clap::Error),
}

/// Any failure of a single sort request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Sorting Error: {0}")]
    Sort(#[from] SortError),

    #[error("Error writing output: {0}")]
    Output(std::io::Error),
}
