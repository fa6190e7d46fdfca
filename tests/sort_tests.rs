// Integration tests for the in-place sorts

use sortty::algorithms::{
    bubble_sort, insertion_sort, is_sorted, selection_sort, Order, SortAlgorithm,
};
use sortty::trace::Trace;

/// Deterministic pseudo-random arrays, including duplicates and negatives
fn sample_arrays() -> Vec<Vec<i32>> {
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    let mut arrays = vec![
        vec![5, 1, 2, 3, 4],
        vec![1],
        vec![2, 2, 2, 2],
        vec![i32::MAX, i32::MIN, 0, -1, 1],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
    ];
    for len in 1..40 {
        let array = (0..len).map(|_| (next() % 21) as i32 - 10).collect();
        arrays.push(array);
    }
    arrays
}

fn expected(seq: &[i32], order: Order) -> Vec<i32> {
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    if order == Order::Descending {
        sorted.reverse();
    }
    sorted
}

#[test]
fn test_worked_examples() {
    let mut seq = vec![5, 1, 2, 3, 4];
    bubble_sort(&mut seq, Order::Ascending);
    assert_eq!(seq, vec![1, 2, 3, 4, 5]);

    let mut seq = vec![5, 1, 2, 3, 4];
    selection_sort(&mut seq, Order::Descending);
    assert_eq!(seq, vec![5, 4, 3, 2, 1]);

    let mut seq = vec![5, 1, 2, 3, 4];
    insertion_sort(&mut seq, Order::Ascending);
    assert_eq!(seq, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_every_sort_produces_ordered_permutation() {
    for array in sample_arrays() {
        for algorithm in SortAlgorithm::ALL {
            for order in [Order::Ascending, Order::Descending] {
                let mut seq = array.clone();
                algorithm.run(&mut seq, order);

                assert_eq!(
                    seq,
                    expected(&array, order),
                    "{} ({}) on {:?}",
                    algorithm,
                    order,
                    array
                );
                assert_eq!(is_sorted(&seq, order), Ok(true));
            }
        }
    }
}

#[test]
fn test_sorting_sorted_input_changes_nothing() {
    for array in sample_arrays() {
        for order in [Order::Ascending, Order::Descending] {
            let sorted = expected(&array, order);
            for algorithm in SortAlgorithm::ALL {
                let mut seq = sorted.clone();
                let mut trace = Trace::new(&seq, usize::MAX);
                algorithm.run_observed(&mut seq, order, &mut trace);

                assert_eq!(seq, sorted);
                assert_eq!(trace.stats().swaps, 0, "{} swapped sorted input", algorithm);
            }
        }
    }
}

#[test]
fn test_comparison_counts() {
    let n = 12;
    let mut reversed: Vec<i32> = (0..n).rev().collect();
    let sorted: Vec<i32> = (0..n).collect();
    let quadratic = (n * (n - 1) / 2) as usize;

    // Bubble and selection always do the full quadratic scan
    for algorithm in [SortAlgorithm::Bubble, SortAlgorithm::Selection] {
        let mut seq = sorted.clone();
        let mut trace = Trace::new(&seq, usize::MAX);
        algorithm.run_observed(&mut seq, Order::Ascending, &mut trace);
        assert_eq!(trace.stats().comparisons, quadratic);
    }

    // Insertion sort is linear on sorted input, quadratic on reversed input
    let mut seq = sorted.clone();
    let mut trace = Trace::new(&seq, usize::MAX);
    run_insertion(&mut seq, &mut trace);
    assert_eq!(trace.stats().comparisons, n as usize - 1);

    let mut trace = Trace::new(&reversed, usize::MAX);
    run_insertion(&mut reversed, &mut trace);
    assert_eq!(trace.stats().comparisons, quadratic);
    assert_eq!(trace.stats().swaps, quadratic);
}

fn run_insertion(seq: &mut [i32], trace: &mut Trace) {
    SortAlgorithm::Insertion.run_observed(seq, Order::Ascending, trace);
}

#[test]
fn test_empty_input_is_a_noop() {
    for algorithm in SortAlgorithm::ALL {
        let mut seq: Vec<i32> = Vec::new();
        let mut trace = Trace::new(&seq, usize::MAX);
        algorithm.run_observed(&mut seq, Order::Ascending, &mut trace);

        assert!(seq.is_empty());
        assert_eq!(trace.stats().comparisons, 0);
        // Only the initial step
        assert_eq!(trace.len(), 1);
    }
}

#[test]
fn test_trace_replay_matches_result() {
    for array in sample_arrays() {
        for algorithm in SortAlgorithm::ALL {
            let mut seq = array.clone();
            let mut trace = Trace::new(&seq, usize::MAX);
            algorithm.run_observed(&mut seq, Order::Descending, &mut trace);

            assert_eq!(trace.current(), seq.as_slice());
            assert!(trace.preserves_multiset());
            let last = trace.get(trace.len() - 1).expect("trace has steps");
            assert_eq!(last.state, seq);
        }
    }
}
