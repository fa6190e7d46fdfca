// Integration tests for searches and predicates

use sortty::algorithms::{
    binary_search, index_of_max, index_of_min, is_sorted, linear_search, AlgorithmError, Order,
    SearchAlgorithm, SearchOutcome,
};

#[test]
fn test_worked_examples() {
    let unsorted = [5, 1, 2, 3, 4];
    let sorted = [1, 2, 3, 4, 5];

    assert_eq!(index_of_min(&unsorted), Ok(1));
    assert_eq!(index_of_max(&unsorted), Ok(0));
    assert_eq!(index_of_min(&[8]), Ok(0));
    assert_eq!(index_of_max(&[8]), Ok(0));

    assert_eq!(binary_search(2, &sorted), Ok(SearchOutcome::Found(1)));
    assert_eq!(binary_search(6, &sorted), Ok(SearchOutcome::NotFound));
    assert_eq!(binary_search(2, &unsorted), Err(AlgorithmError::NotSorted));

    assert_eq!(linear_search(3, &unsorted), Ok(SearchOutcome::Found(3)));
    assert_eq!(linear_search(6, &unsorted), Ok(SearchOutcome::NotFound));
}

#[test]
fn test_empty_input_is_invalid_everywhere() {
    assert_eq!(index_of_min(&[]), Err(AlgorithmError::InvalidInput));
    assert_eq!(index_of_max(&[]), Err(AlgorithmError::InvalidInput));
    assert_eq!(
        is_sorted(&[], Order::Descending),
        Err(AlgorithmError::InvalidInput)
    );
    for algorithm in SearchAlgorithm::ALL {
        assert_eq!(algorithm.run(0, &[]), Err(AlgorithmError::InvalidInput));
    }
}

#[test]
fn test_linear_search_finds_matching_index() {
    let seq = [4, -2, 9, -2, 0, 7];
    for value in -5..12 {
        match linear_search(value, &seq) {
            Ok(SearchOutcome::Found(index)) => {
                assert_eq!(seq[index], value);
                assert!(seq[..index].iter().all(|&v| v != value));
            }
            Ok(SearchOutcome::NotFound) => assert!(!seq.contains(&value)),
            Err(e) => panic!("unexpected error {}", e),
        }
    }
}

#[test]
fn test_binary_search_agrees_with_linear_on_existence() {
    let arrays: [&[i32]; 5] = [
        &[1],
        &[1, 2, 3, 4, 5],
        &[-7, -7, 0, 3, 3, 3, 10],
        &[2, 4, 6, 8, 10, 12, 14, 16],
        &[i32::MIN, 0, i32::MAX],
    ];

    for seq in arrays {
        for value in [-8, -7, 0, 1, 2, 3, 5, 9, 10, 16, 17, i32::MIN, i32::MAX] {
            let linear = linear_search(value, seq).unwrap();
            let binary = binary_search(value, seq).unwrap();

            assert_eq!(
                linear.index().is_some(),
                binary.index().is_some(),
                "value {} in {:?}",
                value,
                seq
            );
            if let Some(index) = binary.index() {
                assert_eq!(seq[index], value);
            }
        }
    }
}

#[test]
fn test_binary_search_rejects_descending_input() {
    assert_eq!(
        binary_search(3, &[5, 4, 3, 2, 1]),
        Err(AlgorithmError::NotSorted)
    );
    // A constant array is sorted in both directions
    assert_eq!(binary_search(3, &[3, 3, 3]), Ok(SearchOutcome::Found(1)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        AlgorithmError::InvalidInput.to_string(),
        "Invalid input. The array is either null or size is a non-positive integer."
    );
    assert_eq!(
        AlgorithmError::NotSorted.to_string(),
        "Invalid input. The array is not sorted in ascending order."
    );
}
