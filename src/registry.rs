//! Sort dispatcher.
//!
//! Maps algorithm names to stateless [`SortAlgorithm`] implementations and
//! validates a request before handing it to the selected routine.

use log::info;

use crate::error::SortError;
use crate::sorting::{
    BubbleSort, MergeSort, Order, QuickSort, SelectionSort, ShellSort, SortAlgorithm,
};

/// Registry of all sort algorithms, keyed by name
pub struct SortFactory {
    algorithms: Vec<Box<dyn SortAlgorithm>>,
}

impl SortFactory {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: SortAlgorithm + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn SortAlgorithm>] {
        &self.algorithms
    }

    /// Find algorithm by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&dyn SortAlgorithm> {
        self.algorithms
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// Sort `data` with the algorithm called `algorithm_name`.
    ///
    /// When `expected_size` is given it must match `data.len()`. The input is
    /// left untouched; the sorted copy is returned.
    pub fn sort_data(
        &self,
        algorithm_name: &str,
        data: &[i64],
        order: Order,
        expected_size: Option<usize>,
    ) -> Result<Vec<i64>, SortError> {
        let sorter = self.lookup(algorithm_name, data.len(), expected_size)?;
        Ok(Self::run(sorter, data, order))
    }

    /// Like [`sort_data`](Self::sort_data), for callers holding untyped
    /// tokens. Every token must parse as an integer.
    pub fn sort_tokens<S: AsRef<str>>(
        &self,
        algorithm_name: &str,
        tokens: &[S],
        order: Order,
        expected_size: Option<usize>,
    ) -> Result<Vec<i64>, SortError> {
        let sorter = self.lookup(algorithm_name, tokens.len(), expected_size)?;

        let data = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let token = token.as_ref();
                token.parse::<i64>().map_err(|_| SortError::NotAnInteger {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::run(sorter, &data, order))
    }

    fn lookup(
        &self,
        algorithm_name: &str,
        actual: usize,
        expected_size: Option<usize>,
    ) -> Result<&dyn SortAlgorithm, SortError> {
        let sorter = self
            .find(algorithm_name)
            .ok_or_else(|| SortError::UnknownAlgorithm {
                name: algorithm_name.to_string(),
                supported: self.names(),
            })?;

        match expected_size {
            Some(expected) if expected != actual => {
                Err(SortError::SizeMismatch { expected, actual })
            }
            _ => Ok(sorter),
        }
    }

    fn run(sorter: &dyn SortAlgorithm, data: &[i64], order: Order) -> Vec<i64> {
        info!(
            "Sorting {} elements using **{}** in **{}** order...",
            data.len(),
            sorter.name().to_uppercase(),
            order.as_str().to_uppercase()
        );

        sorter.sort(data, order)
    }
}

impl Default for SortFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> SortFactory {
    let mut registry = SortFactory::new();

    registry.register(BubbleSort);
    registry.register(SelectionSort);
    registry.register(QuickSort);
    registry.register(MergeSort);
    registry.register(ShellSort);

    registry
}
