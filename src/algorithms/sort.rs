//! In-place comparison sorts
//!
//! All three sorts share one contract: reorder `seq` into `order` using only
//! adjacent or pairwise swaps, leaving the multiset of values untouched. An
//! empty slice is a no-op.
//!
//! # Complexity
//!
//! | Sort      | Comparisons            | Swaps            |
//! |-----------|------------------------|------------------|
//! | Bubble    | always `n(n-1)/2`      | number of inversions |
//! | Selection | always `n(n-1)/2`      | at most `n-1`    |
//! | Insertion | `n-1` to `n(n-1)/2`    | number of inversions |
//!
//! Bubble sort has no "no swaps this pass" early exit; all `n-1` passes run.

use super::predicates::{index_of_max_observed, index_of_min_observed};
use super::{Offset, Order, Silent, StepObserver};
use std::fmt;

/// The available sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
    ];

    pub fn run(self, seq: &mut [i32], order: Order) {
        self.run_observed(seq, order, &mut Silent)
    }

    pub fn run_observed<O: StepObserver + ?Sized>(
        self,
        seq: &mut [i32],
        order: Order,
        observer: &mut O,
    ) {
        match self {
            SortAlgorithm::Bubble => bubble_sort_observed(seq, order, observer),
            SortAlgorithm::Selection => selection_sort_observed(seq, order, observer),
            SortAlgorithm::Insertion => insertion_sort_observed(seq, order, observer),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Bubble => write!(f, "Bubble Sort"),
            SortAlgorithm::Selection => write!(f, "Selection Sort"),
            SortAlgorithm::Insertion => write!(f, "Insertion Sort"),
        }
    }
}

/// Sort with repeated adjacent-pair passes.
///
/// ```
/// use sortty::algorithms::{bubble_sort, Order};
///
/// let mut seq = [5, 1, 2, 3, 4];
/// bubble_sort(&mut seq, Order::Ascending);
/// assert_eq!(seq, [1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort(seq: &mut [i32], order: Order) {
    bubble_sort_observed(seq, order, &mut Silent)
}

pub fn bubble_sort_observed<O: StepObserver + ?Sized>(
    seq: &mut [i32],
    order: Order,
    observer: &mut O,
) {
    let n = seq.len();
    if n == 0 {
        return;
    }

    // Pass i bubbles the i-th extreme value into position n-i-1
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            observer.compare(j, j + 1);
            if order.violated_by(seq[j], seq[j + 1]) {
                seq.swap(j, j + 1);
                observer.swap(j, j + 1);
            }
        }
        observer.settle(n - i - 1);
    }
    observer.settle(0);
}

/// Sort by repeatedly selecting the extreme of the unsorted suffix.
///
/// Uses [`index_of_min`](super::index_of_min) for ascending order and
/// [`index_of_max`](super::index_of_max) for descending, so ties go to the
/// first occurrence in the suffix.
///
/// ```
/// use sortty::algorithms::{selection_sort, Order};
///
/// let mut seq = [5, 1, 2, 3, 4];
/// selection_sort(&mut seq, Order::Descending);
/// assert_eq!(seq, [5, 4, 3, 2, 1]);
/// ```
pub fn selection_sort(seq: &mut [i32], order: Order) {
    selection_sort_observed(seq, order, &mut Silent)
}

pub fn selection_sort_observed<O: StepObserver + ?Sized>(
    seq: &mut [i32],
    order: Order,
    observer: &mut O,
) {
    let n = seq.len();
    if n == 0 {
        return;
    }

    for i in 0..n - 1 {
        let suffix = &seq[i..];
        let mut shifted = Offset {
            inner: &mut *observer,
            by: i,
        };
        let found = match order {
            Order::Ascending => index_of_min_observed(suffix, &mut shifted),
            Order::Descending => index_of_max_observed(suffix, &mut shifted),
        };

        // The suffix is never empty here
        let Ok(offset) = found else {
            return;
        };

        let target = i + offset;
        if target != i {
            seq.swap(i, target);
            observer.swap(i, target);
        }
        observer.settle(i);
    }
    observer.settle(n - 1);
}

/// Sort by sinking each element leftward into the sorted prefix.
///
/// ```
/// use sortty::algorithms::{insertion_sort, Order};
///
/// let mut seq = [5, 1, 2, 3, 4];
/// insertion_sort(&mut seq, Order::Ascending);
/// assert_eq!(seq, [1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort(seq: &mut [i32], order: Order) {
    insertion_sort_observed(seq, order, &mut Silent)
}

pub fn insertion_sort_observed<O: StepObserver + ?Sized>(
    seq: &mut [i32],
    order: Order,
    observer: &mut O,
) {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 {
            observer.compare(j - 1, j);
            if !order.violated_by(seq[j - 1], seq[j]) {
                break;
            }
            seq.swap(j - 1, j);
            observer.swap(j - 1, j);
            j -= 1;
        }
    }
}
