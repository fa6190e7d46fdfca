//! Error types for the array algorithms
//!
//! This module defines [`AlgorithmError`], the failure half of every predicate
//! and search result. "Value not found" is not an error; it is the
//! [`SearchOutcome::NotFound`](super::SearchOutcome::NotFound) outcome.

use std::fmt;

/// Errors reported by the core algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The sequence is empty. Checked before any other work.
    InvalidInput,

    /// Binary search was given a sequence that is not in ascending order
    NotSorted,
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::InvalidInput => {
                write!(
                    f,
                    "Invalid input. The array is either null or size is a non-positive integer."
                )
            }
            AlgorithmError::NotSorted => {
                write!(f, "Invalid input. The array is not sorted in ascending order.")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}
