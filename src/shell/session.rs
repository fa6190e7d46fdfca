//! Running one operation against a fresh copy of the user's array
//!
//! A [`Session`] owns the array the user entered. Each [`Session::run`]
//! clones it, applies one [`Operation`] to the clone while recording a
//! [`Trace`], and hands back a [`Report`]. The entered array never changes,
//! so every menu selection starts from the same input.
//!
//! # Binary search
//!
//! With presorting enabled (the default), binary search first sorts the copy
//! ascending with selection sort and says so in the trace. With it disabled,
//! an unsorted array surfaces [`AlgorithmError::NotSorted`].

use super::input::format_array;
use crate::algorithms::{AlgorithmError, Order, SearchAlgorithm, SearchOutcome, SortAlgorithm};
use crate::trace::Trace;
use std::fmt;

/// Default memory budget for one operation's step history (64 MiB)
pub const DEFAULT_TRACE_LIMIT: usize = 64 * 1024 * 1024;

/// Message recorded before presorting for binary search
pub const PRESORT_NOTE: &str = "Sorting the array. Binary search requires a sorted array.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sort {
        algorithm: SortAlgorithm,
        order: Order,
    },
    Search {
        algorithm: SearchAlgorithm,
        value: i32,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sort { algorithm, order } => write!(f, "{} ({})", algorithm, order),
            Operation::Search { algorithm, value } => write!(f, "{} for {}", algorithm, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Sorted,
    Search(Result<SearchOutcome, AlgorithmError>),
}

/// Everything produced by one operation
#[derive(Debug)]
pub struct Report {
    pub operation: Operation,
    /// The working copy after the operation
    pub output: Vec<i32>,
    /// Whether the copy was sorted before a binary search
    pub presorted: bool,
    pub result: OperationResult,
    pub trace: Trace,
}

impl Report {
    /// One-line result as shown to the user
    pub fn summary(&self) -> String {
        match (&self.result, self.operation) {
            (OperationResult::Sorted, _) => format_array(&self.output),
            (OperationResult::Search(outcome), Operation::Search { value, .. }) => {
                match outcome {
                    Ok(SearchOutcome::Found(index)) => {
                        format!("{} found at index {}", value, index)
                    }
                    Ok(SearchOutcome::NotFound) => format!("{} not found.", value),
                    Err(e) => format!("Error: {}", e),
                }
            }
            (OperationResult::Search(_), Operation::Sort { .. }) => {
                format_array(&self.output)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.result, OperationResult::Search(Err(_)))
    }
}

/// The user's array plus the settings every operation runs with
#[derive(Debug, Clone)]
pub struct Session {
    values: Vec<i32>,
    presort: bool,
    trace_limit: usize,
}

impl Session {
    pub fn new(values: Vec<i32>) -> Self {
        Session {
            values,
            presort: true,
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }

    pub fn with_presort(mut self, presort: bool) -> Self {
        self.presort = presort;
        self
    }

    pub fn with_trace_limit(mut self, trace_limit: usize) -> Self {
        self.trace_limit = trace_limit;
        self
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn presort(&self) -> bool {
        self.presort
    }

    /// Apply `operation` to a copy of the array
    pub fn run(&self, operation: Operation) -> Report {
        let mut working = self.values.clone();
        let mut trace = Trace::new(&working, self.trace_limit);
        let mut presorted = false;

        let result = match operation {
            Operation::Sort { algorithm, order } => {
                trace.note(operation.to_string());
                algorithm.run_observed(&mut working, order, &mut trace);
                OperationResult::Sorted
            }
            Operation::Search { algorithm, value } => {
                if algorithm.requires_sorted() && self.presort {
                    trace.note(PRESORT_NOTE);
                    SortAlgorithm::Selection.run_observed(
                        &mut working,
                        Order::Ascending,
                        &mut trace,
                    );
                    presorted = true;
                }
                trace.note(operation.to_string());
                OperationResult::Search(algorithm.run_observed(value, &working, &mut trace))
            }
        };

        Report {
            operation,
            output: working,
            presorted,
            result,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session::new(vec![5, 1, 2, 3, 4])
    }

    #[test]
    fn test_runs_on_a_copy() {
        let session = sample();
        let report = session.run(Operation::Sort {
            algorithm: SortAlgorithm::Bubble,
            order: Order::Ascending,
        });

        assert_eq!(report.output, vec![1, 2, 3, 4, 5]);
        assert_eq!(session.values(), &[5, 1, 2, 3, 4]);
        assert_eq!(report.summary(), "Array elements: 1 2 3 4 5");
    }

    #[test]
    fn test_binary_search_presorts_by_default() {
        let report = sample().run(Operation::Search {
            algorithm: SearchAlgorithm::Binary,
            value: 2,
        });

        assert!(report.presorted);
        assert_eq!(report.output, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.result, OperationResult::Search(Ok(SearchOutcome::Found(1))));
        assert_eq!(report.summary(), "2 found at index 1");
    }

    #[test]
    fn test_binary_search_without_presort_reports_not_sorted() {
        let report = sample().with_presort(false).run(Operation::Search {
            algorithm: SearchAlgorithm::Binary,
            value: 2,
        });

        assert!(!report.presorted);
        assert!(report.is_error());
        assert_eq!(
            report.summary(),
            "Error: Invalid input. The array is not sorted in ascending order."
        );
    }

    #[test]
    fn test_linear_search_never_presorts() {
        let report = sample().run(Operation::Search {
            algorithm: SearchAlgorithm::Linear,
            value: 6,
        });

        assert!(!report.presorted);
        assert_eq!(report.output, vec![5, 1, 2, 3, 4]);
        assert_eq!(report.summary(), "6 not found.");
    }

    #[test]
    fn test_empty_session_reports_invalid_input() {
        let report = Session::new(Vec::new()).run(Operation::Search {
            algorithm: SearchAlgorithm::Linear,
            value: 1,
        });

        assert_eq!(
            report.result,
            OperationResult::Search(Err(AlgorithmError::InvalidInput))
        );
    }

    #[test]
    fn test_operation_display() {
        let op = Operation::Sort {
            algorithm: SortAlgorithm::Selection,
            order: Order::Descending,
        };
        assert_eq!(op.to_string(), "Selection Sort (descending)");
    }
}
