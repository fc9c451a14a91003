//! Sequential, map, fallible, and batch transforms.

use sidekick::{transform_batch, transform_list, transform_list_with_error, transform_map};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("even number: {0}")]
struct EvenError(i64);

// ============================================================================
// transform_list / transform_map
// ============================================================================

#[test]
fn list_preserves_order() {
    let out = transform_list(&[3, 1, 2], |n| n.to_string());
    assert_eq!(out, vec!["3", "1", "2"]);
}

#[test]
fn list_empty_input_gives_empty_output() {
    let out: Vec<String> = transform_list(&[] as &[i32], |n| n.to_string());
    assert!(out.is_empty());
}

#[test]
fn map_transforms_values_keeps_keys() {
    let mut ages = HashMap::new();
    ages.insert("alice".to_string(), 30);
    ages.insert("bob".to_string(), 25);

    let doubled = transform_map(&ages, |age| age * 2);

    assert_eq!(doubled.len(), 2);
    assert_eq!(doubled["alice"], 60);
    assert_eq!(doubled["bob"], 50);
}

// ============================================================================
// transform_list_with_error
// ============================================================================

#[test]
fn with_error_partitions_successes_and_errors() {
    let (values, errors) = transform_list_with_error(&[1i64, 2, 3, 4, 5], |n| {
        if n % 2 == 0 {
            Err(EvenError(*n))
        } else {
            Ok(n.to_string())
        }
    });

    assert_eq!(values, vec!["1", "3", "5"]);
    assert_eq!(errors, vec![EvenError(2), EvenError(4)]);
}

#[test]
fn with_error_all_ok_has_no_errors() {
    let (values, errors) =
        transform_list_with_error(&[1i64, 3, 5], |n| Ok::<_, EvenError>(n + 1));
    assert_eq!(values, vec![2, 4, 6]);
    assert!(errors.is_empty());
}

#[test]
fn with_error_all_fail_gives_empty_values() {
    let (values, errors) =
        transform_list_with_error(&[2i64, 4], |n| Err::<String, _>(EvenError(*n)));
    assert!(values.is_empty());
    assert_eq!(errors.len(), 2);
}

// ============================================================================
// transform_batch
// ============================================================================

#[test]
fn batch_groups_in_order_and_concatenates() {
    let seen = RefCell::new(Vec::new());
    let out = transform_batch(
        &[1, 2, 3, 4, 5, 6, 7],
        |batch| {
            seen.borrow_mut().push(batch.to_vec());
            batch.iter().map(|n| n * 10).collect()
        },
        3,
    );

    assert_eq!(
        *seen.borrow(),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
    );
    assert_eq!(out, vec![10, 20, 30, 40, 50, 60, 70]);
}

#[test]
fn batch_output_matches_sequential_transform() {
    let items: Vec<i32> = (0..37).collect();
    let batched = transform_batch(&items, |b| b.iter().map(|n| n + 1).collect(), 5);
    let sequential = transform_list(&items, |n| n + 1);
    assert_eq!(batched, sequential);
}

#[test]
fn batch_empty_input() {
    let out = transform_batch(&[] as &[i32], |b| b.to_vec(), 3);
    assert!(out.is_empty());
}
