//! Linear and binary search
//!
//! Both searches check for an empty slice first. Binary search additionally
//! verifies ascending order with [`is_sorted`](super::is_sorted) and reports
//! [`AlgorithmError::NotSorted`] instead of guessing.
//!
//! # Duplicates
//!
//! Linear search always returns the leftmost match. Binary search returns
//! whichever matching index its bisection path reaches first, which is not
//! necessarily the leftmost one.

use super::predicates::is_sorted_observed;
use super::{AlgorithmError, Order, SearchOutcome, Silent, StepObserver};
use std::cmp::Ordering;
use std::fmt;

/// The available searching algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Linear, SearchAlgorithm::Binary];

    pub fn run(self, value: i32, seq: &[i32]) -> Result<SearchOutcome, AlgorithmError> {
        self.run_observed(value, seq, &mut Silent)
    }

    pub fn run_observed<O: StepObserver + ?Sized>(
        self,
        value: i32,
        seq: &[i32],
        observer: &mut O,
    ) -> Result<SearchOutcome, AlgorithmError> {
        match self {
            SearchAlgorithm::Linear => linear_search_observed(value, seq, observer),
            SearchAlgorithm::Binary => binary_search_observed(value, seq, observer),
        }
    }

    /// Whether the algorithm needs its input in ascending order
    pub fn requires_sorted(self) -> bool {
        matches!(self, SearchAlgorithm::Binary)
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Linear => write!(f, "Linear Search"),
            SearchAlgorithm::Binary => write!(f, "Binary Search"),
        }
    }
}

/// Index of the first element equal to `value`, scanning left to right.
///
/// ```
/// use sortty::algorithms::{linear_search, SearchOutcome};
///
/// assert_eq!(linear_search(3, &[5, 1, 2, 3, 4]), Ok(SearchOutcome::Found(3)));
/// assert_eq!(linear_search(6, &[5, 1, 2, 3, 4]), Ok(SearchOutcome::NotFound));
/// ```
pub fn linear_search(value: i32, seq: &[i32]) -> Result<SearchOutcome, AlgorithmError> {
    linear_search_observed(value, seq, &mut Silent)
}

pub fn linear_search_observed<O: StepObserver + ?Sized>(
    value: i32,
    seq: &[i32],
    observer: &mut O,
) -> Result<SearchOutcome, AlgorithmError> {
    if seq.is_empty() {
        return Err(AlgorithmError::InvalidInput);
    }

    for (i, &element) in seq.iter().enumerate() {
        observer.inspect(i);
        if element == value {
            return Ok(SearchOutcome::Found(i));
        }
    }

    Ok(SearchOutcome::NotFound)
}

/// Bisection search over an ascending slice.
///
/// ```
/// use sortty::algorithms::{binary_search, AlgorithmError, SearchOutcome};
///
/// assert_eq!(binary_search(2, &[1, 2, 3, 4, 5]), Ok(SearchOutcome::Found(1)));
/// assert_eq!(binary_search(6, &[1, 2, 3, 4, 5]), Ok(SearchOutcome::NotFound));
/// assert_eq!(binary_search(2, &[5, 1, 2, 3, 4]), Err(AlgorithmError::NotSorted));
/// ```
pub fn binary_search(value: i32, seq: &[i32]) -> Result<SearchOutcome, AlgorithmError> {
    binary_search_observed(value, seq, &mut Silent)
}

pub fn binary_search_observed<O: StepObserver + ?Sized>(
    value: i32,
    seq: &[i32],
    observer: &mut O,
) -> Result<SearchOutcome, AlgorithmError> {
    if !is_sorted_observed(seq, Order::Ascending, observer)? {
        return Err(AlgorithmError::NotSorted);
    }

    // Values outside [first, last] cannot be present
    let last = seq.len() - 1;
    observer.inspect(0);
    observer.inspect(last);
    if value < seq[0] || value > seq[last] {
        return Ok(SearchOutcome::NotFound);
    }

    let mut left = 0;
    let mut right = last;
    while left <= right {
        let mid = left + (right - left) / 2;
        observer.bisect(left, mid, right);

        match seq[mid].cmp(&value) {
            Ordering::Equal => return Ok(SearchOutcome::Found(mid)),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => right = next,
                None => break,
            },
        }
    }

    Ok(SearchOutcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probes {
        inspected: Vec<usize>,
        windows: Vec<(usize, usize, usize)>,
    }

    impl StepObserver for Probes {
        fn inspect(&mut self, index: usize) {
            self.inspected.push(index);
        }

        fn bisect(&mut self, left: usize, mid: usize, right: usize) {
            self.windows.push((left, mid, right));
        }
    }

    #[test]
    fn test_linear_search_first_match() {
        assert_eq!(linear_search(7, &[7, 3, 7]), Ok(SearchOutcome::Found(0)));
        assert_eq!(linear_search(3, &[5, 1, 2, 3, 4]), Ok(SearchOutcome::Found(3)));
        assert_eq!(linear_search(6, &[5, 1, 2, 3, 4]), Ok(SearchOutcome::NotFound));
    }

    #[test]
    fn test_linear_search_stops_at_match() {
        let mut probes = Probes::default();
        let outcome = linear_search_observed(2, &[5, 1, 2, 3, 4], &mut probes);
        assert_eq!(outcome, Ok(SearchOutcome::Found(2)));
        assert_eq!(probes.inspected, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_is_invalid_before_anything_else() {
        assert_eq!(linear_search(1, &[]), Err(AlgorithmError::InvalidInput));
        assert_eq!(binary_search(1, &[]), Err(AlgorithmError::InvalidInput));
    }

    #[test]
    fn test_binary_search_scenarios() {
        let sorted = [1, 2, 3, 4, 5];
        assert_eq!(binary_search(2, &sorted), Ok(SearchOutcome::Found(1)));
        assert_eq!(binary_search(6, &sorted), Ok(SearchOutcome::NotFound));
        assert_eq!(binary_search(0, &sorted), Ok(SearchOutcome::NotFound));
        assert_eq!(
            binary_search(2, &[5, 1, 2, 3, 4]),
            Err(AlgorithmError::NotSorted)
        );
    }

    #[test]
    fn test_binary_search_gap_inside_range() {
        assert_eq!(binary_search(4, &[1, 3, 5, 7]), Ok(SearchOutcome::NotFound));
        assert_eq!(binary_search(1, &[1]), Ok(SearchOutcome::Found(0)));
        assert_eq!(binary_search(2, &[1, 3]), Ok(SearchOutcome::NotFound));
    }

    #[test]
    fn test_binary_search_duplicates_follow_bisection_path() {
        // mid = 2 on the first probe, which is not the leftmost 4
        let seq = [4, 4, 4, 4, 9];
        assert_eq!(binary_search(4, &seq), Ok(SearchOutcome::Found(2)));
        assert_eq!(linear_search(4, &seq), Ok(SearchOutcome::Found(0)));
    }

    #[test]
    fn test_binary_search_out_of_range_skips_bisection() {
        let mut probes = Probes::default();
        let outcome = binary_search_observed(10, &[1, 2, 3], &mut probes);
        assert_eq!(outcome, Ok(SearchOutcome::NotFound));
        assert!(probes.windows.is_empty());
    }

    #[test]
    fn test_binary_search_windows() {
        let mut probes = Probes::default();
        let outcome = binary_search_observed(7, &[1, 3, 5, 7, 9, 11, 13], &mut probes);
        assert_eq!(outcome, Ok(SearchOutcome::Found(3)));
        assert_eq!(probes.windows, vec![(0, 3, 6)]);

        let mut probes = Probes::default();
        let outcome = binary_search_observed(11, &[1, 3, 5, 7, 9, 11, 13], &mut probes);
        assert_eq!(outcome, Ok(SearchOutcome::Found(5)));
        assert_eq!(probes.windows, vec![(0, 3, 6), (4, 5, 6)]);
    }
}
