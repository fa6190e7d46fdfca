//! Classic array algorithms over `i32` slices
//!
//! This module is the library core:
//! - [`predicates`]: index of minimum/maximum and the sortedness check
//! - [`sort`]: bubble, selection and insertion sort (in place)
//! - [`search`]: linear and binary search (read only)
//! - [`errors`]: [`AlgorithmError`]
//!
//! # Results
//!
//! Predicates return `Result<usize, AlgorithmError>` and searches return
//! `Result<SearchOutcome, AlgorithmError>`. An empty slice is always
//! [`AlgorithmError::InvalidInput`], checked before anything else.
//!
//! # Observation
//!
//! Each algorithm has an `*_observed` variant that reports every comparison,
//! swap and probe to a [`StepObserver`]. The plain variants use [`Silent`].
//! Observers only receive indices; the slice itself never leaves the call.

pub mod errors;
pub mod predicates;
pub mod search;
pub mod sort;

use std::fmt;

pub use errors::AlgorithmError;
pub use predicates::{index_of_max, index_of_min, is_sorted};
pub use search::{binary_search, linear_search, SearchAlgorithm};
pub use sort::{bubble_sort, insertion_sort, selection_sort, SortAlgorithm};

/// Direction of a sort or sortedness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Non-decreasing
    #[default]
    Ascending,
    /// Non-increasing
    Descending,
}

impl Order {
    /// True if `left` placed directly before `right` breaks this order.
    ///
    /// Equal values never break either order.
    pub fn violated_by(self, left: i32, right: i32) -> bool {
        match self {
            Order::Ascending => left > right,
            Order::Descending => left < right,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending"),
        }
    }
}

/// Successful result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn index(self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(index),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Receives the individual steps an algorithm performs.
///
/// All methods default to doing nothing, so an observer only implements the
/// events it cares about.
pub trait StepObserver {
    /// Elements at `left` and `right` were compared with each other
    fn compare(&mut self, _left: usize, _right: usize) {}

    /// Elements at `a` and `b` were exchanged
    fn swap(&mut self, _a: usize, _b: usize) {}

    /// Element at `index` was compared with the search value
    fn inspect(&mut self, _index: usize) {}

    /// Binary search narrowed its window to `left..=right` and probes `mid`
    fn bisect(&mut self, _left: usize, _mid: usize, _right: usize) {}

    /// Position `index` holds its final value
    fn settle(&mut self, _index: usize) {}
}

/// Observer that ignores every step
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl StepObserver for Silent {}

/// Shifts every reported index by a fixed offset.
///
/// Used when an algorithm runs on a sub-slice (selection sort scanning the
/// unsorted suffix) but the observer expects positions in the whole slice.
pub(crate) struct Offset<'a, O: StepObserver + ?Sized> {
    pub(crate) inner: &'a mut O,
    pub(crate) by: usize,
}

impl<O: StepObserver + ?Sized> StepObserver for Offset<'_, O> {
    fn compare(&mut self, left: usize, right: usize) {
        self.inner.compare(left + self.by, right + self.by)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.inner.swap(a + self.by, b + self.by)
    }

    fn inspect(&mut self, index: usize) {
        self.inner.inspect(index + self.by)
    }

    fn bisect(&mut self, left: usize, mid: usize, right: usize) {
        self.inner
            .bisect(left + self.by, mid + self.by, right + self.by)
    }

    fn settle(&mut self, index: usize) {
        self.inner.settle(index + self.by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_violation() {
        assert!(Order::Ascending.violated_by(2, 1));
        assert!(!Order::Ascending.violated_by(1, 2));
        assert!(!Order::Ascending.violated_by(3, 3));
        assert!(Order::Descending.violated_by(1, 2));
        assert!(!Order::Descending.violated_by(3, 3));
    }

    #[test]
    fn test_order_default_and_toggle() {
        assert_eq!(Order::default(), Order::Ascending);
        assert_eq!(Order::Ascending.toggled(), Order::Descending);
        assert_eq!(Order::Descending.toggled(), Order::Ascending);
    }

    #[test]
    fn test_offset_shifts_indices() {
        #[derive(Default)]
        struct Log(Vec<(usize, usize)>);
        impl StepObserver for Log {
            fn swap(&mut self, a: usize, b: usize) {
                self.0.push((a, b));
            }
        }

        let mut log = Log::default();
        let mut offset = Offset {
            inner: &mut log,
            by: 3,
        };
        offset.swap(0, 2);
        assert_eq!(log.0, vec![(3, 5)]);
    }
}
