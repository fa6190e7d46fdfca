//! Index and sortedness predicates
//!
//! [`index_of_min`] and [`index_of_max`] resolve ties to the first
//! occurrence. A single-element slice answers `0` without comparing anything.

use super::{AlgorithmError, Order, Silent, StepObserver};

/// Index of the first occurrence of the smallest value.
///
/// ```
/// use sortty::algorithms::index_of_min;
///
/// assert_eq!(index_of_min(&[5, 1, 2, 3, 4]), Ok(1));
/// ```
pub fn index_of_min(seq: &[i32]) -> Result<usize, AlgorithmError> {
    index_of_min_observed(seq, &mut Silent)
}

/// Index of the first occurrence of the largest value.
///
/// ```
/// use sortty::algorithms::index_of_max;
///
/// assert_eq!(index_of_max(&[5, 1, 2, 3, 4]), Ok(0));
/// ```
pub fn index_of_max(seq: &[i32]) -> Result<usize, AlgorithmError> {
    index_of_max_observed(seq, &mut Silent)
}

pub fn index_of_min_observed<O: StepObserver + ?Sized>(
    seq: &[i32],
    observer: &mut O,
) -> Result<usize, AlgorithmError> {
    index_of_extremum(seq, observer, |candidate, best| candidate < best)
}

pub fn index_of_max_observed<O: StepObserver + ?Sized>(
    seq: &[i32],
    observer: &mut O,
) -> Result<usize, AlgorithmError> {
    index_of_extremum(seq, observer, |candidate, best| candidate > best)
}

/// Left-to-right scan keeping the best index seen so far.
/// `beats` must be strict so that earlier occurrences win ties.
fn index_of_extremum<O, F>(seq: &[i32], observer: &mut O, beats: F) -> Result<usize, AlgorithmError>
where
    O: StepObserver + ?Sized,
    F: Fn(i32, i32) -> bool,
{
    if seq.is_empty() {
        return Err(AlgorithmError::InvalidInput);
    }
    if seq.len() == 1 {
        return Ok(0);
    }

    let mut best = 0;
    for i in 1..seq.len() {
        observer.compare(i, best);
        if beats(seq[i], seq[best]) {
            best = i;
        }
    }

    Ok(best)
}

/// Check whether `seq` is monotonic in `order`.
///
/// Returns `Ok(false)` at the first adjacent pair that strictly breaks the
/// order; equal neighbours are fine.
///
/// ```
/// use sortty::algorithms::{is_sorted, Order};
///
/// assert_eq!(is_sorted(&[1, 2, 2, 3], Order::Ascending), Ok(true));
/// assert_eq!(is_sorted(&[1, 2, 3], Order::Descending), Ok(false));
/// ```
pub fn is_sorted(seq: &[i32], order: Order) -> Result<bool, AlgorithmError> {
    is_sorted_observed(seq, order, &mut Silent)
}

pub fn is_sorted_observed<O: StepObserver + ?Sized>(
    seq: &[i32],
    order: Order,
    observer: &mut O,
) -> Result<bool, AlgorithmError> {
    if seq.is_empty() {
        return Err(AlgorithmError::InvalidInput);
    }

    for i in 1..seq.len() {
        observer.compare(i - 1, i);
        if order.violated_by(seq[i - 1], seq[i]) {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountCompares(usize);

    impl StepObserver for CountCompares {
        fn compare(&mut self, _left: usize, _right: usize) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_min_max_index() {
        let seq = [5, 1, 2, 3, 4];
        assert_eq!(index_of_min(&seq), Ok(1));
        assert_eq!(index_of_max(&seq), Ok(0));
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let seq = [3, 1, 7, 1, 7];
        assert_eq!(index_of_min(&seq), Ok(1));
        assert_eq!(index_of_max(&seq), Ok(2));
    }

    #[test]
    fn test_single_element_skips_scan() {
        let mut counter = CountCompares::default();
        assert_eq!(index_of_min_observed(&[42], &mut counter), Ok(0));
        assert_eq!(index_of_max_observed(&[42], &mut counter), Ok(0));
        assert_eq!(counter.0, 0);
    }

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(index_of_min(&[]), Err(AlgorithmError::InvalidInput));
        assert_eq!(index_of_max(&[]), Err(AlgorithmError::InvalidInput));
        assert_eq!(
            is_sorted(&[], Order::Ascending),
            Err(AlgorithmError::InvalidInput)
        );
    }

    #[test]
    fn test_is_sorted_directions() {
        assert_eq!(is_sorted(&[5, 1, 2, 3, 4], Order::Ascending), Ok(false));
        assert_eq!(is_sorted(&[1, 2, 3, 4, 5], Order::Ascending), Ok(true));
        assert_eq!(is_sorted(&[1, 2, 3, 4, 5], Order::Descending), Ok(false));
        assert_eq!(is_sorted(&[5, 5, 3, 1], Order::Descending), Ok(true));
        assert_eq!(is_sorted(&[7], Order::Descending), Ok(true));
    }

    #[test]
    fn test_is_sorted_stops_at_first_violation() {
        let mut counter = CountCompares::default();
        let sorted = is_sorted_observed(&[1, 0, 2, 3, 4], Order::Ascending, &mut counter);
        assert_eq!(sorted, Ok(false));
        assert_eq!(counter.0, 1);
    }
}
